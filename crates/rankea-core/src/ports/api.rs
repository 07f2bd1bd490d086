use async_trait::async_trait;

use crate::domain::album::Album;
use crate::domain::draft::AlbumPayload;
use crate::domain::ids::AlbumId;
use crate::domain::sort::{SortKey, SortOrder};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
  /// Fallo de transporte (DNS, timeout, conexión caída…).
  #[error("http error: {0}")]
  Http(String),

  /// El backend respondió, pero con un status fuera de 2xx.
  #[error("unexpected status: {0}")]
  Status(u16),

  /// El cuerpo de la respuesta no se pudo decodificar.
  #[error("decode error: {0}")]
  Decode(String),
}

/// Port del servicio remoto de ranking.
///
/// No expone detalles de implementación (reqwest, URLs, serialización). El
/// dominio solo ve las cuatro operaciones del colaborador externo; el adapter
/// decide cómo viajan por el cable.
#[async_trait]
pub trait RankingApi: Send + Sync {
  /// Lista ordenada por el servidor según `sort`/`order`.
  async fn list_albums(&self, sort: SortKey, order: SortOrder) -> Result<Vec<Album>, ApiError>;

  /// Crea un álbum nuevo. Devuelve el álbum ya persistido (con `id`).
  async fn create_album(&self, payload: &AlbumPayload) -> Result<Album, ApiError>;

  /// Reemplaza el álbum `id` con el payload completo.
  async fn update_album(&self, id: &AlbumId, payload: &AlbumPayload) -> Result<Album, ApiError>;

  /// Borra el álbum `id`. El status de la respuesta no se interpreta.
  async fn delete_album(&self, id: &AlbumId) -> Result<(), ApiError>;
}
