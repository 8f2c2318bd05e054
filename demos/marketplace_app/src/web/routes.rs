// demos/marketplace_app/src/web/routes.rs

use actix_web::web;

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// This function is called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1") // Base path for API version 1
      // Health Check Route
      .route("/health", web::get().to(health_check_handler))
      // Authentication Routes (mock credential store)
      .service(
        web::scope("/auth")
          .route(
            "/signup",
            web::post().to(crate::web::handlers::auth_handlers::signup_handler),
          )
          .route(
            "/signin",
            web::post().to(crate::web::handlers::auth_handlers::signin_handler),
          ),
      )
      // Catalog Routes
      .service(
        web::scope("/products")
          .route(
            "",
            web::get().to(crate::web::handlers::product_handlers::list_products_handler),
          )
          .route(
            "",
            web::post().to(crate::web::handlers::product_handlers::create_product_handler),
          )
          .route(
            "/{product_id}",
            web::get().to(crate::web::handlers::product_handlers::get_product_handler),
          )
          .route(
            "/{product_id}",
            web::delete().to(crate::web::handlers::product_handlers::delete_product_handler),
          ),
      )
      // Personalized recommendations (best-effort; may return an empty list)
      .route(
        "/recommendations",
        web::post().to(crate::web::handlers::recommendation_handlers::recommendations_handler),
      )
      // Image enhancement (foreground oracle; failures surface to the caller)
      .route(
        "/images/enhance",
        web::post().to(crate::web::handlers::media_handlers::enhance_image_handler),
      )
      // Storefront chat assistant
      .route(
        "/chat",
        web::post().to(crate::web::handlers::chat_handlers::chat_handler),
      ),
  );
}
