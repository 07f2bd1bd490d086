use rankea_api::{ApiConfig, HttpRankingApi};
use rankea_core::domain::{AlbumDraft, SongEntry};
use rankea_core::ports::RankingApi;

// Crea un álbum de prueba contra el backend real y lo borra al final.
#[tokio::main]
async fn main() {
  let cfg = ApiConfig::load().expect("failed to load api config");
  let api = HttpRankingApi::new(&cfg).expect("failed to build http client");

  let draft = AlbumDraft {
    title: "Smoke Test Album".to_string(),
    artist: "rankea".to_string(),
    album_type: "EP".to_string(),
    songs: vec![
      SongEntry { title: "Uno".to_string(), rating: "7".to_string(), note: String::new() },
      SongEntry { title: "Dos".to_string(), rating: "9.5".to_string(), note: "smoke".to_string() },
    ],
  };

  let payload = draft.validate().expect("draft should be valid");

  println!("Creating album at {}", cfg.base_url);
  let created = api.create_album(&payload).await.expect("failed to create album");
  println!("Created with id = {} (avg {:?})", created.id, created.average);

  api.delete_album(&created.id).await.expect("failed to delete album");
  println!("Deleted {}", created.id);
}
