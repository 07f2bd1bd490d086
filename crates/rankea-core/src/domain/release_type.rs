use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Representa el tipo de lanzamiento de un álbum.
///
/// Sigue la clasificación clásica de la industria musical (Album, EP,
/// Single, etc.) pero también permite valores personalizados mediante
/// [`ReleaseType::Custom`], porque el campo llega como texto libre desde el
/// formulario y desde el backend.
///
/// En el cable viaja siempre como cadena plana (`"Album"`, `"EP"`, `"lo que
/// sea"`), nunca como enum etiquetado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReleaseType {
  /// Un álbum completo.
  Album,
  /// Extended Play: más corto que un álbum, más largo que un single.
  EP,
  /// Un lanzamiento de una sola pista o pocas pistas.
  Single,
  /// Recopilación de pistas de varios releases o artistas.
  Compilation,
  /// Mezcla continua o set estilo DJ.
  Mix,
  /// Valor no estándar escrito por el usuario. Conserva el texto original.
  Custom(String),
}

impl From<&str> for ReleaseType {
  /// Convierte una cadena en un `ReleaseType`.
  ///
  /// Las coincidencias conocidas se normalizan (minúsculas, trimming).
  /// Cualquier otra cosa se conserva tal cual como `Custom`, así que
  /// **convertir nunca falla** ni pierde lo que escribió el usuario.
  fn from(s: &str) -> Self {
    let normalized = s.trim().to_lowercase();

    match normalized.as_str() {
      "album" | "cd" | "lp" | "vinyl" | "album/cd" => ReleaseType::Album,
      "ep" => ReleaseType::EP,
      "single" => ReleaseType::Single,
      "compilation" => ReleaseType::Compilation,
      "mix" | "dj-mix" | "mixtape" => ReleaseType::Mix,
      _ => ReleaseType::Custom(s.to_string()),
    }
  }
}

impl From<String> for ReleaseType {
  fn from(s: String) -> Self {
    ReleaseType::from(s.as_str())
  }
}

impl FromStr for ReleaseType {
  type Err = std::convert::Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(ReleaseType::from(s))
  }
}

impl From<ReleaseType> for String {
  fn from(rt: ReleaseType) -> String {
    rt.to_string()
  }
}

impl fmt::Display for ReleaseType {
  /// Devuelve un nombre legible del tipo de lanzamiento.
  ///
  /// Los tipos estándar se imprimen con formato bonito.
  /// `Custom` imprime directamente el valor proporcionado.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ReleaseType::Album => write!(f, "Album"),
      ReleaseType::EP => write!(f, "EP"),
      ReleaseType::Single => write!(f, "Single"),
      ReleaseType::Compilation => write!(f, "Compilation"),
      ReleaseType::Mix => write!(f, "Mix"),
      ReleaseType::Custom(s) => write!(f, "{s}"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn known_values_are_normalized() {
    assert_eq!(ReleaseType::from("  ALBUM "), ReleaseType::Album);
    assert_eq!(ReleaseType::from("dj-mix"), ReleaseType::Mix);
    assert_eq!(ReleaseType::from("lp"), ReleaseType::Album);
  }

  #[test]
  fn custom_keeps_original_text() {
    let rt = ReleaseType::from("Bootleg Japonés");
    assert_eq!(rt, ReleaseType::Custom("Bootleg Japonés".to_string()));
    assert_eq!(rt.to_string(), "Bootleg Japonés");
  }
}
