use serde::Deserialize;

use rankea_core::domain::{Album, AlbumId, ReleaseType, SongEntry};

/// Valor que el backend manda a veces como número y a veces como cadena.
///
/// Los ratings se guardan tal cual los mandó el formulario (cadenas), pero
/// los campos calculados (`average`) vuelven como números. Acá se normaliza
/// todo a texto, que es como vive en el dominio.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LooseValue {
  Number(f64),
  Text(String),
}

impl LooseValue {
  pub fn into_text(self) -> String {
    match self {
      LooseValue::Number(n) => format!("{n}"),
      LooseValue::Text(s) => s,
    }
  }
}

/// Una canción tal como llega en el cable.
#[derive(Debug, Clone, Deserialize)]
pub struct SongDto {
  pub title: String,
  #[serde(default)]
  pub rating: Option<LooseValue>,
  #[serde(default)]
  pub note: String,
}

/// Un álbum tal como llega en el cable. Mapea a [`Album`] del dominio.
///
/// Tolerante por diseño: campos calculados ausentes caen a default en vez de
/// romper el decode de toda la lista.
#[derive(Debug, Clone, Deserialize)]
pub struct AlbumDto {
  pub id: String,
  pub title: String,
  pub artist: String,
  #[serde(rename = "type", default)]
  pub album_type: String,
  #[serde(default)]
  pub songs: Vec<SongDto>,
  #[serde(default)]
  pub rank: u32,
  #[serde(default)]
  pub average: Option<LooseValue>,
  #[serde(default)]
  pub total_score: f64,
  #[serde(default)]
  pub max_score: u32,
}

impl From<SongDto> for SongEntry {
  fn from(dto: SongDto) -> Self {
    SongEntry {
      title: dto.title,
      rating: dto.rating.map(LooseValue::into_text).unwrap_or_default(),
      note: dto.note,
    }
  }
}

impl From<AlbumDto> for Album {
  fn from(dto: AlbumDto) -> Self {
    Album {
      id: AlbumId::new(dto.id),
      title: dto.title,
      artist: dto.artist,
      album_type: ReleaseType::from(dto.album_type.as_str()),
      songs: dto.songs.into_iter().map(SongEntry::from).collect(),
      rank: dto.rank,
      average: dto.average.map(LooseValue::into_text),
      total_score: dto.total_score,
      max_score: dto.max_score,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn numeric_and_text_ratings_both_map_to_text() {
    let json = r#"{
      "id": "abc",
      "title": "Dummy",
      "artist": "Portishead",
      "type": "Album",
      "songs": [
        { "title": "Mysterons", "rating": 9, "note": "" },
        { "title": "Roads", "rating": "9.5", "note": "cierre" }
      ],
      "rank": 1,
      "average": 9.25,
      "total_score": 18.5,
      "max_score": 20
    }"#;

    let dto: AlbumDto = serde_json::from_str(json).unwrap();
    let album = Album::from(dto);

    assert_eq!(album.songs[0].rating, "9");
    assert_eq!(album.songs[1].rating, "9.5");
    assert_eq!(album.average.as_deref(), Some("9.25"));
    assert_eq!(album.album_type, ReleaseType::Album);
  }

  #[test]
  fn null_average_and_missing_fields_do_not_break_the_decode() {
    let json = r#"{
      "id": "xyz",
      "title": "Demo",
      "artist": "Nadie",
      "type": "Demo casero",
      "songs": [ { "title": "Sin nota" } ],
      "average": null
    }"#;

    let dto: AlbumDto = serde_json::from_str(json).unwrap();
    let album = Album::from(dto);

    assert_eq!(album.average, None);
    assert_eq!(album.rank, 0);
    assert_eq!(album.songs[0].rating, "");
    assert_eq!(album.album_type, ReleaseType::Custom("Demo casero".to_string()));
  }
}
