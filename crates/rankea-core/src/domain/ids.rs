use serde::{Deserialize, Serialize};
use std::fmt;

/// Identificador de un álbum persistido en el servicio remoto.
///
/// A diferencia de un UUID generado localmente, este ID **siempre** lo asigna
/// el backend al crear el álbum. El cliente nunca inventa uno: solo reenvía
/// el valor tal cual llegó en la respuesta (por eso se guarda como `String`
/// opaca, sin asumir formato).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlbumId(String);

impl AlbumId {
  /// Construye un `AlbumId` a partir del valor crudo que devolvió el backend.
  pub fn new(raw: impl Into<String>) -> Self {
    AlbumId(raw.into())
  }

  /// Devuelve el valor interno como `&str`.
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<String> for AlbumId {
  fn from(raw: String) -> Self {
    AlbumId(raw)
  }
}

impl From<&str> for AlbumId {
  fn from(raw: &str) -> Self {
    AlbumId(raw.to_string())
  }
}

impl fmt::Display for AlbumId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}
