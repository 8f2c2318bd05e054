// swapmart/examples/catalog_basic.rs

use std::sync::Arc;
use swapmart::{
  BrowsingHistory, Catalog, CatalogError, Category, CategoryFilter, InMemoryCatalog, NewProduct, ProductFilter,
  RankingOracle, RankingRequest, RankingResponse, Recommender,
};
use tracing::info;

// A toy ranking oracle: recommends everything it was shown, reversed.
// Real deployments implement this trait against a hosted model.
struct EchoOracle;

#[async_trait::async_trait]
impl RankingOracle for EchoOracle {
  async fn rank(&self, request: RankingRequest) -> anyhow::Result<RankingResponse> {
    let mut product_ids = request.browsing_history;
    product_ids.reverse();
    Ok(RankingResponse { product_ids })
  }
}

#[tokio::main]
async fn main() -> Result<(), CatalogError> {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Catalog Example ---");

  let store = Arc::new(InMemoryCatalog::new());
  let catalog = Catalog::new(store.clone());

  // Create a couple of listings. Ids and timestamps are generated for us.
  let guitar = catalog.create(
    "user1",
    NewProduct {
      title: "Acoustic Guitar".into(),
      description: "Perfect for beginners.".into(),
      category: Category::Other,
      price: 150.0,
      image_url: "https://example.com/guitar.jpg".into(),
    },
  )?;
  let jacket = catalog.create(
    "user2",
    NewProduct {
      title: "Vintage Leather Jacket".into(),
      description: "Barely worn. Classic look.".into(),
      category: Category::Clothing,
      price: 120.0,
      image_url: "https://example.com/jacket.jpg".into(),
    },
  )?;

  // Newest-first listing, then a filtered view.
  for product in catalog.list(&ProductFilter::new()) {
    info!("Listed: {} (${})", product.title, product.price);
  }
  let clothing = catalog.list(&ProductFilter::new().category(CategoryFilter::Only(Category::Clothing)));
  info!("Clothing listings: {}", clothing.len());

  // Recommendations from browsing history, via the oracle.
  let mut history = BrowsingHistory::new();
  history.record(guitar.id);
  history.record(jacket.id);

  let recommender = Recommender::new(Arc::new(EchoOracle));
  let suggestions = recommender.recommend("user1", &history, store.as_ref()).await;
  for product in &suggestions {
    info!("Recommended: {}", product.title);
  }

  // Owner-scoped deletion: the wrong requester is refused without detail.
  assert!(!catalog.delete(&guitar.id, "user2"));
  assert!(catalog.delete(&guitar.id, "user1"));
  info!("Remaining listings: {}", catalog.list(&ProductFilter::new()).len());

  Ok(())
}
