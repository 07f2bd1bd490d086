// crates/rankea-core/src/errors.rs
use thiserror::Error;

/// Error genérico del núcleo de Rankea.
///
/// Las capas superiores (Tauri, smoke bins, etc.) deberían mapear este error
/// a mensajes de usuario o logs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
  #[error("api error: {0}")]
  Api(String),

  #[error("not found")]
  NotFound,
}
