use rankea_api::ApiConfig;
use serde::{Deserialize, Serialize};

/// DTO for the `[api]` config section, as exchanged with the frontend.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiConfigDto {
  pub base_url: String,
  pub timeout_secs: u64,
}

impl From<ApiConfig> for ApiConfigDto {
  fn from(cfg: ApiConfig) -> Self {
    ApiConfigDto { base_url: cfg.base_url, timeout_secs: cfg.timeout_secs }
  }
}

impl From<ApiConfigDto> for ApiConfig {
  fn from(dto: ApiConfigDto) -> Self {
    ApiConfig { base_url: dto.base_url, timeout_secs: dto.timeout_secs }
  }
}
