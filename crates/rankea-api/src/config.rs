use rankea_config::{CONFIG_BACKEND, ConfigBackend, ConfigError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiConfig {
  /// URL base del backend de ranking, sin barra final.
  #[serde(default = "default_base_url")]
  pub base_url: String,

  /// Timeout por request, en segundos.
  #[serde(default = "default_timeout_secs")]
  pub timeout_secs: u64,
}

fn default_base_url() -> String {
  "https://albumbackende-1.onrender.com".to_string()
}

fn default_timeout_secs() -> u64 {
  30
}

impl Default for ApiConfig {
  fn default() -> Self {
    ApiConfig { base_url: default_base_url(), timeout_secs: default_timeout_secs() }
  }
}

impl ApiConfig {
  pub fn load() -> Result<Self, ConfigError> {
    let cfg = CONFIG_BACKEND.load_section_with_default("api")?;
    CONFIG_BACKEND.save_section("api", &cfg)?;
    Ok(cfg)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    CONFIG_BACKEND.save_section("api", self)
  }
}
