// demos/marketplace_app/src/web/handlers/auth_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize; // For request payloads
use serde_json::json; // For JSON responses
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::AppError; // Your application specific error
use crate::services::auth_service;
use crate::state::AppState;
use swapmart::UserAccount;

// --- Request DTOs ---
#[derive(Deserialize, Debug)]
pub struct SignupRequestPayload {
  pub display_name: String,
  pub email: String,
  pub password: String,
}

#[derive(Deserialize, Debug)]
pub struct SigninRequestPayload {
  pub email: String,
  pub password: String,
}

// --- Handler Implementations ---

#[instrument(
    name = "handler::signup",
    skip(app_state, req_payload),
    fields(req_email = %req_payload.email)
)]
pub async fn signup_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<SignupRequestPayload>,
) -> Result<HttpResponse, AppError> {
  info!("Signup attempt for email: {}", req_payload.email);

  if req_payload.display_name.trim().is_empty() {
    return Err(AppError::Validation("Display name cannot be empty.".to_string()));
  }

  let password_hash = auth_service::hash_password(&req_payload.password)?;
  let account = UserAccount {
    display_name: req_payload.display_name.clone(),
    email: req_payload.email.clone(),
    password_hash,
  };

  app_state.credentials.save(account).map_err(|_| {
    warn!("Signup refused: email already registered.");
    AppError::Validation("An account with this email already exists.".to_string())
  })?;

  info!("Signup successful for email: {}", req_payload.email);
  Ok(HttpResponse::Created().json(json!({
      "message": "Account created successfully.",
      "email": req_payload.email,
  })))
}

#[instrument(
    name = "handler::signin",
    skip(app_state, req_payload),
    fields(req_email = %req_payload.email)
)]
pub async fn signin_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<SigninRequestPayload>,
) -> Result<HttpResponse, AppError> {
  info!("Signin attempt for email: {}", req_payload.email);

  // One message for "no such account" and "wrong password".
  let invalid = || AppError::Auth("Invalid email or password.".to_string());

  let account = app_state.credentials.find(&req_payload.email).ok_or_else(invalid)?;

  if !auth_service::verify_password(&account.password_hash, &req_payload.password)? {
    warn!("Signin failed: password mismatch.");
    return Err(invalid());
  }

  // Mock session token: this is a demo auth surface, not a real one.
  let token = format!("mock_token_{}", Uuid::new_v4());
  info!("Signin successful for email: {}", req_payload.email);

  Ok(HttpResponse::Ok().json(json!({
      "message": "Signin successful.",
      "displayName": account.display_name,
      "email": account.email,
      "token": token,
  })))
}
