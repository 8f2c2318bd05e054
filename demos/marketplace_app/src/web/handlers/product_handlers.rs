// demos/marketplace_app/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use swapmart::{Category, CategoryFilter, NewProduct, ProductFilter};

#[derive(Deserialize, Debug)]
pub struct ListProductsQuery {
  pub search: Option<String>,
  /// Category name or the "All" sentinel. An unrecognized value matches
  /// nothing rather than falling back to "All".
  pub category: Option<String>,
  pub owner_id: Option<String>,
}

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<ListProductsQuery>,
) -> Result<HttpResponse, AppError> {
  let mut filter = ProductFilter::new();
  if let Some(search) = &query_params.search {
    filter = filter.search(search.clone());
  }
  if let Some(category) = &query_params.category {
    filter = filter.category(CategoryFilter::parse(category));
  }
  if let Some(owner_id) = &query_params.owner_id {
    filter = filter.owner(owner_id.clone());
  }

  let products = app_state.catalog.list(&filter);
  info!("Listed {} products.", products.len());

  Ok(HttpResponse::Ok().json(json!({
      "products": products
  })))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  match app_state.catalog.get(&product_id) {
    Some(product) => Ok(HttpResponse::Ok().json(json!({ "product": product }))),
    None => {
      warn!("Product with ID {} not found.", product_id);
      Err(AppError::NotFound(format!("Product with ID {} not found.", product_id)))
    }
  }
}

#[derive(Deserialize, Debug)]
pub struct CreateProductPayload {
  pub owner_id: String,
  pub title: String,
  pub description: String,
  pub category: String,
  pub price: f64,
  pub image_url: String,
}

#[instrument(name = "handler::create_product", skip(app_state, payload), fields(owner_id = %payload.owner_id, title = %payload.title))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<CreateProductPayload>,
) -> Result<HttpResponse, AppError> {
  let payload = payload.into_inner();

  // Creation is stricter than filtering: only members of the closed
  // enumeration may ever be persisted.
  let category: Category = payload
    .category
    .parse()
    .map_err(|_| AppError::Validation(format!("Unknown category: {}", payload.category)))?;

  let product = app_state.catalog.create(
    &payload.owner_id,
    NewProduct {
      title: payload.title,
      description: payload.description,
      category,
      price: payload.price,
      image_url: payload.image_url,
    },
  )?;

  info!(product_id = %product.id, "Product created via API.");
  Ok(HttpResponse::Created().json(json!({
      "message": "Product created successfully.",
      "product": product
  })))
}

#[derive(Deserialize, Debug)]
pub struct DeleteProductQuery {
  pub requester_id: String,
}

#[instrument(name = "handler::delete_product", skip(app_state, path, query), fields(product_id = %path.as_ref(), requester_id = %query.requester_id))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  query: web::Query<DeleteProductQuery>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  if app_state.catalog.delete(&product_id, &query.requester_id) {
    Ok(HttpResponse::Ok().json(json!({ "message": "Product deleted." })))
  } else {
    // One response for "no such listing" and "not yours": a failed delete
    // must not reveal that somebody else's listing exists.
    Err(AppError::NotFound("Listing not found.".to_string()))
  }
}
