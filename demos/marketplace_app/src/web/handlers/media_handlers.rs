// demos/marketplace_app/src/web/handlers/media_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;
use swapmart::enhance_image;

#[derive(Deserialize, Debug)]
pub struct EnhanceImagePayload {
  /// "data:<mimetype>;base64,<data>" product photo.
  pub photo_data_uri: String,
}

#[instrument(name = "handler::enhance_image", skip(app_state, payload), fields(payload_len = payload.photo_data_uri.len()))]
pub async fn enhance_image_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<EnhanceImagePayload>,
) -> Result<HttpResponse, AppError> {
  // Foreground user action: a failure here surfaces as a descriptive
  // error response (via From<CatalogError>), and the user may retry.
  let enhanced = enhance_image(app_state.enhancer.as_ref(), &payload.photo_data_uri).await?;

  info!("Image enhanced via API.");
  Ok(HttpResponse::Ok().json(json!({ "enhancedPhotoDataUri": enhanced })))
}
