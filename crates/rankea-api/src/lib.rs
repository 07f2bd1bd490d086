pub mod config;
pub mod models;

pub use config::ApiConfig;

use std::time::Duration;

use async_trait::async_trait;

use rankea_core::domain::{Album, AlbumId, AlbumPayload, SortKey, SortOrder};
use rankea_core::ports::{ApiError, RankingApi};

use crate::models::AlbumDto;

const USER_AGENT: &str = concat!("rankea/", env!("CARGO_PKG_VERSION"));

/// Adapter HTTP del port [`RankingApi`], contra el backend remoto.
///
/// Sin cola, sin reintentos, sin número de secuencia: cada operación es una
/// request suelta y el que llama decide qué hacer con el resultado.
pub struct HttpRankingApi {
  http: reqwest::Client,
  base_url: String,
}

impl HttpRankingApi {
  pub fn new(cfg: &ApiConfig) -> Result<Self, ApiError> {
    let http = reqwest::Client::builder()
      .user_agent(USER_AGENT)
      .timeout(Duration::from_secs(cfg.timeout_secs))
      .build()
      .map_err(|e| ApiError::Http(e.to_string()))?;

    Ok(Self { http, base_url: cfg.base_url.trim_end_matches('/').to_string() })
  }

  fn list_url(&self, sort: SortKey, order: SortOrder) -> String {
    format!("{}/?sort={}&order={}", self.base_url, sort, order)
  }

  fn album_url(&self, id: &AlbumId) -> String {
    format!("{}/{}", self.base_url, id)
  }

  async fn decode_album(response: reqwest::Response) -> Result<Album, ApiError> {
    let status = response.status();
    if !status.is_success() {
      return Err(ApiError::Status(status.as_u16()));
    }

    let dto: AlbumDto = response.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(Album::from(dto))
  }
}

#[async_trait]
impl RankingApi for HttpRankingApi {
  async fn list_albums(&self, sort: SortKey, order: SortOrder) -> Result<Vec<Album>, ApiError> {
    let url = self.list_url(sort, order);
    tracing::debug!(%url, "fetching album list");

    let response =
      self.http.get(&url).send().await.map_err(|e| ApiError::Http(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
      tracing::warn!(status = status.as_u16(), "album list fetch failed");
      return Err(ApiError::Status(status.as_u16()));
    }

    let dtos: Vec<AlbumDto> =
      response.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;

    tracing::debug!(count = dtos.len(), "album list fetched");
    Ok(dtos.into_iter().map(Album::from).collect())
  }

  async fn create_album(&self, payload: &AlbumPayload) -> Result<Album, ApiError> {
    tracing::debug!(title = %payload.title, "creating album");

    let response = self
      .http
      .post(&self.base_url)
      .json(payload)
      .send()
      .await
      .map_err(|e| ApiError::Http(e.to_string()))?;

    let album = Self::decode_album(response).await?;
    tracing::info!(id = %album.id, title = %album.title, "album created");
    Ok(album)
  }

  async fn update_album(&self, id: &AlbumId, payload: &AlbumPayload) -> Result<Album, ApiError> {
    let url = self.album_url(id);
    tracing::debug!(%url, "updating album");

    let response = self
      .http
      .put(&url)
      .json(payload)
      .send()
      .await
      .map_err(|e| ApiError::Http(e.to_string()))?;

    let album = Self::decode_album(response).await?;
    tracing::info!(id = %album.id, "album updated");
    Ok(album)
  }

  async fn delete_album(&self, id: &AlbumId) -> Result<(), ApiError> {
    let url = self.album_url(id);
    tracing::debug!(%url, "deleting album");

    // El status no se interpreta: solo los fallos de transporte son Err.
    let response =
      self.http.delete(&url).send().await.map_err(|e| ApiError::Http(e.to_string()))?;

    tracing::debug!(status = response.status().as_u16(), "delete issued");
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rankea_core::domain::SongEntry;

  fn api() -> HttpRankingApi {
    let cfg = ApiConfig {
      base_url: "https://rank.example.com/".to_string(),
      timeout_secs: 5,
    };
    HttpRankingApi::new(&cfg).unwrap()
  }

  #[test]
  fn base_url_loses_its_trailing_slash() {
    assert_eq!(api().base_url, "https://rank.example.com");
  }

  #[test]
  fn list_url_carries_sort_and_order() {
    let url = api().list_url(SortKey::TotalScore, SortOrder::Asc);
    assert_eq!(url, "https://rank.example.com/?sort=total_score&order=asc");
  }

  #[test]
  fn album_url_appends_the_id() {
    let url = api().album_url(&AlbumId::from("66f0a1"));
    assert_eq!(url, "https://rank.example.com/66f0a1");
  }

  #[test]
  fn payload_serializes_with_the_wire_field_names() {
    let payload = AlbumPayload {
      title: "Dummy".to_string(),
      artist: "Portishead".to_string(),
      album_type: "Album".to_string(),
      songs: vec![SongEntry {
        title: "Roads".to_string(),
        rating: "10".to_string(),
        note: String::new(),
      }],
    };

    let value = serde_json::to_value(&payload).unwrap();

    assert_eq!(value["type"], "Album");
    assert!(value.get("album_type").is_none());
    assert_eq!(value["songs"][0]["rating"], "10");
  }
}
