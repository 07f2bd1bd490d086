use async_trait::async_trait;

// Port de avisos al usuario.
// La capa de UI (Tauri) implementará esto con diálogos nativos.
#[async_trait]
pub trait Feedback: Send + Sync {
  /// Aviso bloqueante para el usuario (estilo `alert`). No espera respuesta.
  async fn alert(&self, message: &str);

  /// Pregunta sí/no (estilo `confirm`). `false` también cubre "cerró el
  /// diálogo sin contestar".
  async fn confirm(&self, message: &str) -> bool;
}
