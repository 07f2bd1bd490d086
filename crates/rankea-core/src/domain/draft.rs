use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::song::SongEntry;

/// El borrador del formulario: un álbum a medio componer.
///
/// Existe solo mientras se escribe o edita; al enviarse con éxito se
/// convierte en un [`crate::domain::Album`] persistido (con `id` y `rank`
/// asignados por el backend, nunca por el cliente).
///
/// `album_type` se guarda como texto crudo porque es un input libre: mientras
/// el usuario teclea "Albu…" no queremos normalizarle el campo debajo de los
/// dedos. La conversión a [`crate::domain::ReleaseType`] ocurre en el mapeo
/// de respuestas del backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumDraft {
  pub title: String,
  pub artist: String,
  pub album_type: String,
  /// Secuencia ordenada de filas. Siempre hay al menos una.
  pub songs: Vec<SongEntry>,
}

impl AlbumDraft {
  /// Borrador recién abierto: campos vacíos, tipo "Album" y una fila vacía.
  pub fn new() -> Self {
    AlbumDraft {
      title: String::new(),
      artist: String::new(),
      album_type: "Album".to_string(),
      songs: vec![SongEntry::empty()],
    }
  }

  /// Compuerta de envío: valida el borrador y arma el payload.
  ///
  /// Las filas que no pasan [`SongEntry::is_submittable`] se **descartan del
  /// payload** (no solo del agregado): una fila de cola agregada y nunca
  /// rellenada no viaja al backend.
  ///
  /// Falla si el título o el artista están vacíos, o si después de filtrar no
  /// queda ninguna canción. En ese caso no debe salir ninguna request.
  ///
  /// Los chequeos son de presencia cruda, sin trimming: `" "` cuenta como
  /// presente.
  pub fn validate(&self) -> Result<AlbumPayload, DraftError> {
    let songs: Vec<SongEntry> = self.songs.iter().filter(|s| s.is_submittable()).cloned().collect();

    if self.title.is_empty() || self.artist.is_empty() || songs.is_empty() {
      return Err(DraftError::Incomplete);
    }

    Ok(AlbumPayload {
      title: self.title.clone(),
      artist: self.artist.clone(),
      album_type: self.album_type.clone(),
      songs,
    })
  }
}

impl Default for AlbumDraft {
  fn default() -> Self {
    AlbumDraft::new()
  }
}

/// Cuerpo de un create/update tal como lo espera el backend.
///
/// El campo se llama `type` en el JSON; los ratings viajan como cadenas, tal
/// cual los tecleó el usuario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlbumPayload {
  pub title: String,
  pub artist: String,
  #[serde(rename = "type")]
  pub album_type: String,
  pub songs: Vec<SongEntry>,
}

/// Rechazo local del envío. Se muestra al usuario, no viaja por la red.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
  #[error("Fill out album info and songs.")]
  Incomplete,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn song(title: &str, rating: &str) -> SongEntry {
    SongEntry { title: title.to_string(), rating: rating.to_string(), note: String::new() }
  }

  fn draft_with_songs(songs: Vec<SongEntry>) -> AlbumDraft {
    AlbumDraft {
      title: "OK Computer".to_string(),
      artist: "Radiohead".to_string(),
      album_type: "Album".to_string(),
      songs,
    }
  }

  #[test]
  fn incomplete_rows_are_dropped_from_payload() {
    let draft = draft_with_songs(vec![song("A", "5"), song("", "3")]);

    let payload = draft.validate().unwrap();
    assert_eq!(payload.songs.len(), 1);
    assert_eq!(payload.songs[0].title, "A");
  }

  #[test]
  fn blank_trailing_rows_are_not_sent() {
    let draft = draft_with_songs(vec![song("A", "5"), SongEntry::empty(), SongEntry::empty()]);

    let payload = draft.validate().unwrap();
    assert_eq!(payload.songs.len(), 1);
  }

  #[test]
  fn empty_artist_is_rejected() {
    let mut draft = draft_with_songs(vec![song("A", "5")]);
    draft.artist.clear();

    assert_eq!(draft.validate(), Err(DraftError::Incomplete));
  }

  #[test]
  fn no_submittable_song_is_rejected() {
    let draft = draft_with_songs(vec![song("", "3"), song("B", "")]);

    assert_eq!(draft.validate(), Err(DraftError::Incomplete));
  }

  #[test]
  fn presence_checks_do_not_trim() {
    let mut draft = draft_with_songs(vec![song("A", "5")]);
    draft.artist = " ".to_string();

    assert!(draft.validate().is_ok());
  }

  #[test]
  fn rejection_message_is_user_facing() {
    assert_eq!(DraftError::Incomplete.to_string(), "Fill out album info and songs.");
  }
}
