use serde::{Deserialize, Serialize};
use std::fmt;

/// Criterio de orden de la lista de álbumes.
///
/// El orden lo aplica el **servidor**: estos valores viajan tal cual en el
/// query string (`?sort=average`, `?sort=total_score`, …). El cliente no
/// reordena nada localmente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
  Average,
  Title,
  TotalScore,
}

impl SortKey {
  pub fn as_str(&self) -> &'static str {
    match self {
      SortKey::Average => "average",
      SortKey::Title => "title",
      SortKey::TotalScore => "total_score",
    }
  }
}

impl Default for SortKey {
  fn default() -> Self {
    SortKey::Average
  }
}

impl fmt::Display for SortKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Dirección del orden (`?order=asc|desc`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
  Asc,
  Desc,
}

impl SortOrder {
  pub fn as_str(&self) -> &'static str {
    match self {
      SortOrder::Asc => "asc",
      SortOrder::Desc => "desc",
    }
  }
}

impl Default for SortOrder {
  fn default() -> Self {
    SortOrder::Desc
  }
}

impl fmt::Display for SortOrder {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn query_values_match_the_backend_contract() {
    assert_eq!(SortKey::Average.as_str(), "average");
    assert_eq!(SortKey::Title.as_str(), "title");
    assert_eq!(SortKey::TotalScore.as_str(), "total_score");
    assert_eq!(SortOrder::Asc.as_str(), "asc");
    assert_eq!(SortOrder::Desc.as_str(), "desc");
  }

  #[test]
  fn defaults_match_the_initial_view() {
    assert_eq!(SortKey::default(), SortKey::Average);
    assert_eq!(SortOrder::default(), SortOrder::Desc);
  }
}
