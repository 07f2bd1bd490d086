use rankea_api::{ApiConfig, HttpRankingApi};
use rankea_core::domain::{SortKey, SortOrder};
use rankea_core::ports::RankingApi;

#[tokio::main]
async fn main() {
  let cfg = ApiConfig::load().expect("failed to load api config");
  let api = HttpRankingApi::new(&cfg).expect("failed to build http client");

  let albums =
    api.list_albums(SortKey::Average, SortOrder::Desc).await.expect("failed to fetch albums");

  println!("{} álbum(es) en {}", albums.len(), cfg.base_url);
  for album in &albums {
    println!(
      "{}. {} — {} [{}] avg {}",
      album.rank,
      album.title,
      album.artist,
      album.album_type,
      album.average.as_deref().unwrap_or("—"),
    );
  }
}
