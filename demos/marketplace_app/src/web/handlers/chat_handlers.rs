// demos/marketplace_app/src/web/handlers/chat_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;
use swapmart::{ChatRequest, ChatTurn};

#[derive(Deserialize, Debug)]
pub struct ChatPayload {
  #[serde(default)]
  pub history: Vec<ChatTurn>,
  pub message: String,
}

#[instrument(name = "handler::chat", skip(app_state, payload), fields(history_len = payload.history.len()))]
pub async fn chat_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<ChatPayload>,
) -> Result<HttpResponse, AppError> {
  let payload = payload.into_inner();
  let request = ChatRequest {
    history: payload.history,
    message: payload.message,
  };

  let reply = app_state.assistant.reply(request).await.map_err(|e| {
    warn!(error = %e, "Chat assistant failed.");
    AppError::Oracle(format!("{:#}", e))
  })?;

  Ok(HttpResponse::Ok().json(json!({ "reply": reply })))
}
