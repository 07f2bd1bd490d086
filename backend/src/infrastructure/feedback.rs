use async_trait::async_trait;
use rankea_core::ports::Feedback;
use tauri::AppHandle;
use tauri_plugin_dialog::{DialogExt, MessageDialogButtons, MessageDialogKind};
use tokio::sync::oneshot;

/// A `Feedback` implementation backed by native message dialogs.
///
/// This struct holds a reference to the `AppHandle`, allowing it to open
/// dialogs owned by the main window from any command.
#[derive(Clone)]
pub struct DialogFeedback {
  app_handle: AppHandle,
}

impl DialogFeedback {
  pub fn new(app_handle: AppHandle) -> Self {
    Self { app_handle }
  }
}

#[async_trait]
impl Feedback for DialogFeedback {
  async fn alert(&self, message: &str) {
    // Fire-and-forget: the command flow does not wait for the dialog to be
    // dismissed, same as it would not wait on a toast.
    self
      .app_handle
      .dialog()
      .message(message)
      .title("Rankea")
      .kind(MessageDialogKind::Warning)
      .show(|_| {});
  }

  async fn confirm(&self, message: &str) -> bool {
    let (tx, rx) = oneshot::channel();

    self
      .app_handle
      .dialog()
      .message(message)
      .title("Rankea")
      .buttons(MessageDialogButtons::OkCancel)
      .show(move |confirmed| {
        let _ = tx.send(confirmed);
      });

    // A dropped dialog (window closed mid-question) counts as "no".
    rx.await.unwrap_or(false)
  }
}
