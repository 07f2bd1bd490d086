use serde::{Deserialize, Serialize};

use crate::domain::album::Album;
use crate::domain::draft::AlbumDraft;
use crate::domain::ids::AlbumId;
use crate::domain::score::Aggregate;
use crate::domain::song::SongEntry;
use crate::errors::CoreError;

/// Tope duro de filas de canción por borrador.
///
/// Al llegar aquí, "agregar fila" se ignora en silencio: no es un error,
/// simplemente no pasa nada.
pub const MAX_SONG_ROWS: usize = 50;

/// Modo del formulario, como variante etiquetada explícita.
///
/// Nada de "¿hay un `editing_id` seteado?": o estamos creando un álbum nuevo,
/// o estamos editando uno concreto. Un ID vacío no significa nada.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "album_id", rename_all = "snake_case")]
pub enum FormMode {
  Creating,
  Editing(AlbumId),
}

/// Campo de álbum direccionable desde la UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlbumField {
  Title,
  Artist,
  AlbumType,
}

/// Campo de una fila de canción direccionable desde la UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SongField {
  Title,
  Rating,
  Note,
}

/// El estado completo del formulario: modo + borrador + agregado derivado.
///
/// Este es el único dueño del borrador. La capa de render no guarda estado
/// propio: pide snapshots y manda mutaciones, así que el reconciliador y el
/// agregador se pueden probar aislados de cualquier UI.
///
/// Transiciones:
/// - `Creating -> Editing(id)`: [`RankingForm::load_album`] pisa el borrador
///   completo con los valores guardados del álbum (sin merge) y recalcula el
///   agregado de inmediato.
/// - `Editing(id) -> Creating`: [`RankingForm::reset`], por cancelación
///   explícita o por envío exitoso.
/// - `Creating -> Creating`: el envío exitoso de un álbum nuevo también
///   resetea.
/// - Las mutaciones de campo no cambian de modo; las de canción recalculan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingForm {
  mode: FormMode,
  draft: AlbumDraft,
  aggregate: Option<Aggregate>,
}

impl RankingForm {
  /// Formulario recién abierto: modo creación, sin agregado visible.
  pub fn new() -> Self {
    RankingForm { mode: FormMode::Creating, draft: AlbumDraft::new(), aggregate: None }
  }

  pub fn mode(&self) -> &FormMode {
    &self.mode
  }

  pub fn draft(&self) -> &AlbumDraft {
    &self.draft
  }

  /// Agregado visible. `None` = no se muestra nada (formulario recién
  /// abierto o reseteado).
  pub fn aggregate(&self) -> Option<&Aggregate> {
    self.aggregate.as_ref()
  }

  /// Edita un campo de álbum (título, artista, tipo). No toca el agregado.
  pub fn set_album_field(&mut self, field: AlbumField, value: String) {
    match field {
      AlbumField::Title => self.draft.title = value,
      AlbumField::Artist => self.draft.artist = value,
      AlbumField::AlbumType => self.draft.album_type = value,
    }
  }

  /// Edita un campo de la fila `index` y recalcula el agregado.
  pub fn set_song_field(
    &mut self,
    index: usize,
    field: SongField,
    value: String,
  ) -> Result<(), CoreError> {
    let song = self.draft.songs.get_mut(index).ok_or(CoreError::NotFound)?;

    match field {
      SongField::Title => song.title = value,
      SongField::Rating => song.rating = value,
      SongField::Note => song.note = value,
    }

    self.recompute();
    Ok(())
  }

  /// Agrega una fila vacía al final. No-op silencioso en el tope de 50.
  pub fn add_song_row(&mut self) {
    if self.draft.songs.len() >= MAX_SONG_ROWS {
      return;
    }

    self.draft.songs.push(SongEntry::empty());
    self.recompute();
  }

  /// Carga un álbum existente para editarlo.
  ///
  /// Pisa el borrador **completo** (título, artista, tipo, canciones) con los
  /// valores guardados; no hay merge con lo que hubiera a medio escribir. El
  /// agregado se recalcula ya mismo, para que el promedio mostrado refleje
  /// las canciones cargadas antes de cualquier edición.
  pub fn load_album(&mut self, album: &Album) {
    self.mode = FormMode::Editing(album.id.clone());
    self.draft = AlbumDraft {
      title: album.title.clone(),
      artist: album.artist.clone(),
      album_type: album.album_type.to_string(),
      songs: album.songs.clone(),
    };
    self.recompute();
  }

  /// Vuelve al estado inicial: modo creación, una fila vacía, sin agregado.
  pub fn reset(&mut self) {
    self.mode = FormMode::Creating;
    self.draft = AlbumDraft::new();
    self.aggregate = None;
  }

  fn recompute(&mut self) {
    self.aggregate = Some(Aggregate::of_songs(&self.draft.songs));
  }
}

impl Default for RankingForm {
  fn default() -> Self {
    RankingForm::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::release_type::ReleaseType;

  fn sample_album() -> Album {
    Album {
      id: AlbumId::from("abc123"),
      title: "In Rainbows".to_string(),
      artist: "Radiohead".to_string(),
      album_type: ReleaseType::Album,
      songs: vec![
        SongEntry { title: "15 Step".to_string(), rating: "9".to_string(), note: String::new() },
        SongEntry {
          title: "Nude".to_string(),
          rating: "7".to_string(),
          note: "lenta".to_string(),
        },
      ],
      rank: 1,
      average: Some("8.00".to_string()),
      total_score: 16.0,
      max_score: 20,
    }
  }

  #[test]
  fn fresh_form_has_one_empty_row_and_no_aggregate() {
    let form = RankingForm::new();

    assert_eq!(form.mode(), &FormMode::Creating);
    assert_eq!(form.draft().songs.len(), 1);
    assert_eq!(form.draft().songs[0], SongEntry::empty());
    assert_eq!(form.draft().album_type, "Album");
    assert!(form.aggregate().is_none());
  }

  #[test]
  fn song_edits_recompute_the_aggregate() {
    let mut form = RankingForm::new();

    form.set_song_field(0, SongField::Title, "Intro".to_string()).unwrap();
    form.set_song_field(0, SongField::Rating, "8".to_string()).unwrap();

    let agg = form.aggregate().unwrap();
    assert_eq!(agg.total, 8.0);
    assert_eq!(agg.average.as_deref(), Some("8.00"));
    assert_eq!(agg.max, 10);
  }

  #[test]
  fn album_field_edits_do_not_touch_the_aggregate() {
    let mut form = RankingForm::new();

    form.set_album_field(AlbumField::Title, "Kid A".to_string());
    form.set_album_field(AlbumField::Artist, "Radiohead".to_string());

    assert!(form.aggregate().is_none());
  }

  #[test]
  fn out_of_range_row_index_is_reported() {
    let mut form = RankingForm::new();

    let result = form.set_song_field(5, SongField::Title, "nope".to_string());
    assert_eq!(result, Err(CoreError::NotFound));
  }

  #[test]
  fn row_cap_is_a_silent_noop() {
    let mut form = RankingForm::new();

    for _ in 0..100 {
      form.add_song_row();
    }

    assert_eq!(form.draft().songs.len(), MAX_SONG_ROWS);

    // Y sigue sin pasar nada.
    form.add_song_row();
    assert_eq!(form.draft().songs.len(), MAX_SONG_ROWS);
  }

  #[test]
  fn load_album_replaces_the_whole_draft() {
    let mut form = RankingForm::new();
    form.set_album_field(AlbumField::Title, "a medio escribir".to_string());
    form.set_song_field(0, SongField::Rating, "3".to_string()).unwrap();

    let album = sample_album();
    form.load_album(&album);

    assert_eq!(form.mode(), &FormMode::Editing(AlbumId::from("abc123")));
    assert_eq!(form.draft().title, "In Rainbows");
    assert_eq!(form.draft().album_type, "Album");
    assert_eq!(form.draft().songs, album.songs);

    // El agregado refleja las canciones cargadas de inmediato.
    let agg = form.aggregate().unwrap();
    assert_eq!(agg.total, 16.0);
    assert_eq!(agg.average.as_deref(), Some("8.00"));
    assert_eq!(agg.max, 20);
  }

  #[test]
  fn reset_restores_a_single_empty_row_and_clears_the_aggregate() {
    let mut form = RankingForm::new();
    form.load_album(&sample_album());

    form.reset();

    assert_eq!(form.mode(), &FormMode::Creating);
    assert_eq!(form.draft().songs, vec![SongEntry::empty()]);
    assert_eq!(form.draft().title, "");
    assert_eq!(form.draft().artist, "");
    assert_eq!(form.draft().album_type, "Album");
    assert!(form.aggregate().is_none());
  }
}
