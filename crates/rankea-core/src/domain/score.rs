use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::song::SongEntry;

/// Parsea el texto crudo de un rating como `f64`.
///
/// Devuelve `None` para texto vacío, no numérico o `NaN`. Ojo: **no** valida
/// rango. Un `15` o un `-3` parsean bien y entran al agregado tal cual; el
/// único límite `[0, 10]` vive en el input del formulario.
pub fn parse_rating(raw: &str) -> Option<f64> {
  raw.trim().parse::<f64>().ok().filter(|r| !r.is_nan())
}

/// Agregado derivado de las filas de canciones: suma, promedio y techo.
///
/// Distingue explícitamente entre:
/// - `average == None`: ninguna fila tiene rating parseable (no hay promedio
///   que mostrar).
/// - `average == Some(..)`: promedio sobre las filas *con* rating, formateado
///   a dos decimales.
///
/// Nunca se persiste: se recalcula en cada mutación de la lista de canciones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
  /// Suma de los ratings parseados, sin redondear.
  pub total: f64,
  /// `total / cantidad`, a dos decimales. `None` si no hay filas con rating.
  pub average: Option<String>,
  /// Techo posible: `10 * cantidad de filas con rating parseable`.
  ///
  /// Las filas en blanco o con basura no suben el techo: se omiten por
  /// completo, no cuentan como cero.
  pub max: u32,
}

impl Aggregate {
  /// Calcula el agregado sobre la secuencia ordenada de filas del borrador.
  pub fn of_songs(songs: &[SongEntry]) -> Self {
    let ratings: Vec<f64> = songs.iter().filter_map(|s| parse_rating(&s.rating)).collect();

    let total: f64 = ratings.iter().sum();
    let average = if ratings.is_empty() {
      None
    } else {
      Some(format!("{:.2}", total / ratings.len() as f64))
    };

    Aggregate { total, average, max: ratings.len() as u32 * 10 }
  }
}

impl fmt::Display for Aggregate {
  /// Formato de la línea de promedio del formulario: `8.00/10 (16/20)`.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.average {
      Some(avg) => write!(f, "{avg}/10 ({}/{})", self.total, self.max),
      None => write!(f, "—/10 (0/0)"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn rows(ratings: &[&str]) -> Vec<SongEntry> {
    ratings
      .iter()
      .map(|r| SongEntry { title: "x".to_string(), rating: r.to_string(), note: String::new() })
      .collect()
  }

  #[test]
  fn mixed_ratings_skip_unparseable_rows() {
    let agg = Aggregate::of_songs(&rows(&["7", "x", "", "9"]));

    assert_eq!(agg.total, 16.0);
    assert_eq!(agg.average.as_deref(), Some("8.00"));
    assert_eq!(agg.max, 20);
  }

  #[test]
  fn average_is_none_iff_no_parseable_rating() {
    assert_eq!(Aggregate::of_songs(&[]).average, None);
    assert_eq!(Aggregate::of_songs(&rows(&["", "abc"])).average, None);
    assert!(Aggregate::of_songs(&rows(&["0"])).average.is_some());
  }

  #[test]
  fn max_is_ten_per_rated_row() {
    for n in 0..8 {
      let ratings: Vec<&str> = std::iter::repeat_n("5", n).collect();
      assert_eq!(Aggregate::of_songs(&rows(&ratings)).max, n as u32 * 10);
    }

    // Las filas sin rating no suben el techo.
    let agg = Aggregate::of_songs(&rows(&["5", "", "", "5"]));
    assert_eq!(agg.max, 20);
  }

  #[test]
  fn decimals_and_whitespace_parse() {
    assert_eq!(parse_rating("7.5"), Some(7.5));
    assert_eq!(parse_rating(" 8 "), Some(8.0));
    assert_eq!(parse_rating("7"), Some(7.0));
    assert_eq!(parse_rating(""), None);
    assert_eq!(parse_rating("abc"), None);
    assert_eq!(parse_rating("NaN"), None);
  }

  #[test]
  fn out_of_range_values_are_not_clamped() {
    let agg = Aggregate::of_songs(&rows(&["15", "-3"]));

    assert_eq!(agg.total, 12.0);
    assert_eq!(agg.average.as_deref(), Some("6.00"));
    assert_eq!(agg.max, 20);
  }

  #[test]
  fn average_is_formatted_to_two_decimals() {
    let agg = Aggregate::of_songs(&rows(&["7", "8"]));
    assert_eq!(agg.average.as_deref(), Some("7.50"));

    let agg = Aggregate::of_songs(&rows(&["1", "2", "2"]));
    assert_eq!(agg.average.as_deref(), Some("1.67"));
  }

  #[test]
  fn display_matches_form_line() {
    let agg = Aggregate::of_songs(&rows(&["7", "9"]));
    assert_eq!(agg.to_string(), "8.00/10 (16/20)");

    assert_eq!(Aggregate::of_songs(&[]).to_string(), "—/10 (0/0)");
  }
}
