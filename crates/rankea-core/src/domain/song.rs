use serde::{Deserialize, Serialize};

/// Una fila de canción dentro de un álbum.
///
/// Se usa tanto para las filas del borrador (lo que el usuario va tecleando)
/// como para las canciones ya guardadas que devuelve el backend, porque la
/// forma es idéntica: `{ title, rating, note }`.
///
/// `rating` se guarda como texto crudo. Mientras la fila vive en el
/// formulario puede contener cualquier cosa (`""`, `"7.5"`, `"abc"`); el
/// parseo ocurre recién al agregar ([`crate::domain::score::Aggregate`]) o al
/// enviar ([`crate::domain::draft::AlbumDraft::validate`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongEntry {
  pub title: String,
  pub rating: String,
  pub note: String,
}

impl SongEntry {
  /// Fila vacía, lista para que el usuario la rellene.
  pub fn empty() -> Self {
    SongEntry { title: String::new(), rating: String::new(), note: String::new() }
  }

  /// ¿Esta fila califica para ser enviada al backend?
  ///
  /// Exige *ambos* campos presentes: título y rating no vacíos. La nota es
  /// opcional. Una fila agregada con "+ Add Song" y nunca rellenada no pasa.
  pub fn is_submittable(&self) -> bool {
    !self.title.is_empty() && !self.rating.is_empty()
  }
}
