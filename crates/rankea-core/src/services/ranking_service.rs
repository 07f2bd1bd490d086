use serde::Serialize;

use crate::domain::album::Album;
use crate::domain::form::{AlbumField, FormMode, RankingForm, SongField};
use crate::domain::ids::AlbumId;
use crate::domain::sort::{SortKey, SortOrder};
use crate::errors::CoreError;
use crate::ports::{Feedback, RankingApi};

/// Resultado de un intento de envío, para que la UI sepa qué pasó.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitOutcome {
  /// Guardado; el formulario quedó reseteado y la lista refrescada.
  Saved,
  /// Rechazado localmente por la compuerta de envío. No salió ninguna request.
  Rejected,
  /// El backend falló; el borrador quedó intacto para reintentar.
  Failed,
}

/// Resultado de un intento de borrado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteOutcome {
  Deleted,
  /// El usuario no confirmó; no salió ninguna request.
  Cancelled,
}

/// El sincronizador: dueño único del borrador, de la lista de álbumes y del
/// criterio de orden vigente.
///
/// Todo el estado mutable de la aplicación vive acá, como valores explícitos,
/// no como variables ambiente. La capa de render pide snapshots.
///
/// Modelo de concurrencia: un solo hilo lógico. Las requests son async y
/// mientras una está en vuelo la UI sigue viva; no hay cola, ni cancelación,
/// ni número de secuencia. Si dos refresh se cruzan, gana la última respuesta
/// en resolver.
pub struct RankingService<A, F>
where
  A: RankingApi,
  F: Feedback,
{
  api: A,
  feedback: F,
  form: RankingForm,
  albums: Vec<Album>,
  sort_key: SortKey,
  sort_order: SortOrder,
}

impl<A, F> RankingService<A, F>
where
  A: RankingApi,
  F: Feedback,
{
  pub fn new(api: A, feedback: F) -> Self {
    RankingService {
      api,
      feedback,
      form: RankingForm::new(),
      albums: Vec::new(),
      sort_key: SortKey::default(),
      sort_order: SortOrder::default(),
    }
  }

  // -------- Snapshots (lectura) --------

  pub fn form(&self) -> &RankingForm {
    &self.form
  }

  pub fn albums(&self) -> &[Album] {
    &self.albums
  }

  pub fn sort(&self) -> (SortKey, SortOrder) {
    (self.sort_key, self.sort_order)
  }

  // -------- Lista --------

  /// Re-pide la lista al backend con el orden vigente.
  ///
  /// Si el fetch falla, la lista visible se queda como estaba: sin mensaje,
  /// sin reintento. El adapter ya dejó el log.
  pub async fn refresh(&mut self) {
    if let Ok(albums) = self.api.list_albums(self.sort_key, self.sort_order).await {
      self.albums = albums;
    }
  }

  /// Cambia el criterio de orden y refresca.
  pub async fn set_sort(&mut self, key: SortKey, order: SortOrder) {
    self.sort_key = key;
    self.sort_order = order;
    self.refresh().await;
  }

  // -------- Formulario --------

  pub fn set_album_field(&mut self, field: AlbumField, value: String) {
    self.form.set_album_field(field, value);
  }

  pub fn set_song_field(
    &mut self,
    index: usize,
    field: SongField,
    value: String,
  ) -> Result<(), CoreError> {
    self.form.set_song_field(index, field, value)
  }

  pub fn add_song_row(&mut self) {
    self.form.add_song_row();
  }

  /// Pasa a modo edición con el álbum `id` de la lista cargada.
  pub fn start_edit(&mut self, id: &AlbumId) -> Result<(), CoreError> {
    let album = self.albums.iter().find(|a| &a.id == id).cloned().ok_or(CoreError::NotFound)?;
    self.form.load_album(&album);
    Ok(())
  }

  pub fn cancel_edit(&mut self) {
    self.form.reset();
  }

  // -------- Mutaciones remotas --------

  /// Envía el borrador: `POST` en creación, `PUT` en edición.
  ///
  /// - Rechazo local: aviso al usuario, cero requests.
  /// - Éxito: el formulario se resetea (ambos modos vuelven a `Creating`) y
  ///   la lista se refresca.
  /// - Fallo del backend: aviso genérico y el borrador queda tal cual,
  ///   modo incluido, para reintentar.
  pub async fn submit(&mut self) -> SubmitOutcome {
    let payload = match self.form.draft().validate() {
      Ok(payload) => payload,
      Err(err) => {
        self.feedback.alert(&err.to_string()).await;
        return SubmitOutcome::Rejected;
      }
    };

    let mode = self.form.mode().clone();
    let saved = match &mode {
      FormMode::Creating => self.api.create_album(&payload).await,
      FormMode::Editing(id) => self.api.update_album(id, &payload).await,
    };

    match saved {
      Ok(_) => {
        self.form.reset();
        self.refresh().await;
        SubmitOutcome::Saved
      }
      Err(_) => {
        self.feedback.alert("Error saving album").await;
        SubmitOutcome::Failed
      }
    }
  }

  /// Borra un álbum, con confirmación previa del usuario.
  ///
  /// La respuesta del `DELETE` no se interpreta: haya ido bien o mal, se
  /// refresca la lista y listo.
  pub async fn delete(&mut self, id: &AlbumId) -> DeleteOutcome {
    if !self.feedback.confirm("Delete this album?").await {
      return DeleteOutcome::Cancelled;
    }

    let _ = self.api.delete_album(id).await;
    self.refresh().await;
    DeleteOutcome::Deleted
  }
}
