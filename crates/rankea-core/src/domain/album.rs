use serde::{Deserialize, Serialize};

use crate::domain::ids::AlbumId;
use crate::domain::release_type::ReleaseType;
use crate::domain::song::SongEntry;

/// Un álbum ya persistido, tal como lo devuelve el backend.
///
/// Para el cliente es **de solo lectura**: se crea, actualiza y borra
/// exclusivamente vía la API, y tanto `id` como `rank` (la posición ordinal
/// dentro de la lista ordenada) los asigna el servidor. Los campos de puntaje
/// (`average`, `total_score`, `max_score`) también vienen calculados de allá;
/// el cliente no los recalcula para la lista, solo para el borrador.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
  pub id: AlbumId,
  pub title: String,
  pub artist: String,
  pub album_type: ReleaseType,
  pub songs: Vec<SongEntry>,
  /// Posición en la lista ordenada según el criterio de orden vigente.
  pub rank: u32,
  /// Promedio calculado por el servidor. `None` si no hay canciones puntuadas.
  pub average: Option<String>,
  pub total_score: f64,
  pub max_score: u32,
}
