// demos/marketplace_app/src/web/handlers/mod.rs

// Declare handler modules
pub mod auth_handlers;
pub mod chat_handlers;
pub mod media_handlers;
pub mod product_handlers;
pub mod recommendation_handlers;
