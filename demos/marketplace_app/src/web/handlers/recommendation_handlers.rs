// demos/marketplace_app/src/web/handlers/recommendation_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use swapmart::BrowsingHistory;

#[derive(Deserialize, Debug)]
pub struct RecommendationPayload {
  pub user_id: String,
  /// Recently viewed product ids, most-recent last. The client owns this
  /// list; the server never stores it.
  #[serde(default)]
  pub browsing_history: Vec<Uuid>,
}

#[instrument(name = "handler::recommendations", skip(app_state, payload), fields(user_id = %payload.user_id, history_len = payload.browsing_history.len()))]
pub async fn recommendations_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<RecommendationPayload>,
) -> Result<HttpResponse, AppError> {
  let payload = payload.into_inner();
  let history = BrowsingHistory::from_ids(payload.browsing_history);

  // Best-effort by contract: the recommender absorbs oracle failures and
  // an empty list is a perfectly valid response.
  let recommendations = app_state
    .recommender
    .recommend(&payload.user_id, &history, app_state.catalog.store().as_ref())
    .await;

  info!("Returning {} recommendations.", recommendations.len());
  Ok(HttpResponse::Ok().json(json!({ "products": recommendations })))
}
