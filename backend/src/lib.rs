mod config;
mod infrastructure;

use rankea_api::{ApiConfig, HttpRankingApi};
use rankea_core::domain::{
  Album, AlbumField, AlbumId, RankingForm, SongField, SortKey, SortOrder,
};
use rankea_core::services::{DeleteOutcome, RankingService, SubmitOutcome};

use tauri::{Manager, State};
use tokio::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ApiConfigDto;
use infrastructure::feedback::DialogFeedback;

/// Type alias to simplify the generic signature of the Service.
type ConcreteRankingService = RankingService<HttpRankingApi, DialogFeedback>;

/// Global application state managed by Tauri.
///
/// The service owns the single draft and the single album list; every
/// command locks it, mutates, and returns a fresh snapshot for the webview
/// to render.
struct AppState {
  ranking: Mutex<ConcreteRankingService>,
}

// ---- List commands ----

/// Command: Refetches the server-sorted album list and returns it.
///
/// A failed fetch is not surfaced: the previous list is returned unchanged.
#[tauri::command]
async fn albums_refresh(state: State<'_, AppState>) -> Result<Vec<Album>, String> {
  let mut ranking = state.ranking.lock().await;
  ranking.refresh().await;
  Ok(ranking.albums().to_vec())
}

/// Command: Returns the list as last fetched, without hitting the network.
#[tauri::command]
async fn albums_list(state: State<'_, AppState>) -> Result<Vec<Album>, String> {
  Ok(state.ranking.lock().await.albums().to_vec())
}

/// Command: Changes the sort criterion and refetches.
#[tauri::command]
async fn sort_set(
  state: State<'_, AppState>,
  key: SortKey,
  order: SortOrder,
) -> Result<Vec<Album>, String> {
  let mut ranking = state.ranking.lock().await;
  ranking.set_sort(key, order).await;
  Ok(ranking.albums().to_vec())
}

// ---- Form commands ----

/// Command: Current form snapshot (mode + draft + derived aggregate).
#[tauri::command]
async fn form_snapshot(state: State<'_, AppState>) -> Result<RankingForm, String> {
  Ok(state.ranking.lock().await.form().clone())
}

#[tauri::command]
async fn form_set_album_field(
  state: State<'_, AppState>,
  field: AlbumField,
  value: String,
) -> Result<RankingForm, String> {
  let mut ranking = state.ranking.lock().await;
  ranking.set_album_field(field, value);
  Ok(ranking.form().clone())
}

#[tauri::command]
async fn form_set_song_field(
  state: State<'_, AppState>,
  index: usize,
  field: SongField,
  value: String,
) -> Result<RankingForm, String> {
  let mut ranking = state.ranking.lock().await;
  ranking.set_song_field(index, field, value).map_err(|e| e.to_string())?;
  Ok(ranking.form().clone())
}

/// Command: Appends an empty song row. Silently capped at 50 rows.
#[tauri::command]
async fn form_add_song(state: State<'_, AppState>) -> Result<RankingForm, String> {
  let mut ranking = state.ranking.lock().await;
  ranking.add_song_row();
  Ok(ranking.form().clone())
}

/// Command: Loads an album from the fetched list into the form for editing.
#[tauri::command]
async fn form_edit(state: State<'_, AppState>, id: AlbumId) -> Result<RankingForm, String> {
  let mut ranking = state.ranking.lock().await;
  ranking.start_edit(&id).map_err(|e| e.to_string())?;
  Ok(ranking.form().clone())
}

/// Command: Cancels the current edit (or clears a half-written draft).
#[tauri::command]
async fn form_cancel(state: State<'_, AppState>) -> Result<RankingForm, String> {
  let mut ranking = state.ranking.lock().await;
  ranking.cancel_edit();
  Ok(ranking.form().clone())
}

/// Command: Submits the draft (create or update depending on the mode).
///
/// Local rejections and backend failures are reported to the user through
/// the feedback adapter; the outcome tells the webview whether to re-render.
#[tauri::command]
async fn form_submit(state: State<'_, AppState>) -> Result<SubmitOutcome, String> {
  let mut ranking = state.ranking.lock().await;
  Ok(ranking.submit().await)
}

/// Command: Deletes an album, gated by a native confirmation dialog.
#[tauri::command]
async fn album_delete(
  state: State<'_, AppState>,
  id: AlbumId,
) -> Result<DeleteOutcome, String> {
  let mut ranking = state.ranking.lock().await;
  Ok(ranking.delete(&id).await)
}

// ---- Config commands ----

/// Command: Retrieves the current API configuration.
#[tauri::command]
fn api_get_config() -> Result<ApiConfigDto, String> {
  let cfg = ApiConfig::load().map_err(|e| e.to_string())?;
  Ok(ApiConfigDto::from(cfg))
}

/// Command: Persists updated API configuration from the frontend.
///
/// Takes effect on the next application start; the running client keeps its
/// already-built HTTP client.
#[tauri::command]
fn api_save_config(input: ApiConfigDto) -> Result<(), String> {
  let cfg = ApiConfig::from(input);
  cfg.save().map_err(|e| e.to_string())
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "rankea=debug,rankea_api=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tauri::Builder::default()
    .plugin(tauri_plugin_dialog::init())
    .setup(|app| {
      // --- Dependency Injection Phase ---

      // 1. Remote API Adapter (reqwest)
      // Builds the HTTP client from the persisted [api] config section.
      let api_cfg = ApiConfig::load()?;
      let api = HttpRankingApi::new(&api_cfg)?;

      // 2. User Feedback Adapter (native dialogs)
      // Wraps the Tauri AppHandle to show alert/confirm dialogs.
      let feedback = DialogFeedback::new(app.handle().clone());

      // 3. Service Wiring
      // Inject both adapters into the core domain service.
      let ranking = RankingService::new(api, feedback);

      // 4. State Registration
      // Moves the service instance into Tauri's managed state container.
      app.manage(AppState { ranking: Mutex::new(ranking) });

      Ok(())
    })
    .invoke_handler(tauri::generate_handler![
      albums_refresh,
      albums_list,
      sort_set,
      form_snapshot,
      form_set_album_field,
      form_set_song_field,
      form_add_song,
      form_edit,
      form_cancel,
      form_submit,
      album_delete,
      api_get_config,
      api_save_config,
    ])
    .run(tauri::generate_context!())
    .expect("error while running tauri application");
}
