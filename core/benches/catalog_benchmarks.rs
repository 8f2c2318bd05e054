use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use swapmart::{
  BrowsingHistory, CatalogStore, Category, CategoryFilter, InMemoryCatalog, Product, ProductFilter, RankingOracle,
  RankingRequest, RankingResponse, Recommender,
};

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, TimeZone, Utc};
use std::sync::Arc;
use tokio::runtime::Runtime; // To run async code within Criterion
use uuid::Uuid;

// --- Fixture helpers ---

fn seeded_store(count: usize) -> InMemoryCatalog {
  let base = Utc.with_ymd_and_hms(2023, 10, 1, 12, 0, 0).unwrap();
  let categories = Category::ALL;
  let store = InMemoryCatalog::new();
  for i in 0..count {
    store
      .insert(Product {
        id: Uuid::new_v4(),
        owner_id: format!("user{}", i % 7),
        title: format!("Listing number {}", i),
        description: "A perfectly ordinary benchmark listing.".to_string(),
        category: categories[i % categories.len()],
        price: (i % 500) as f64,
        image_url: "https://example.com/item.jpg".to_string(),
        created_at: base + ChronoDuration::seconds(i as i64),
      })
      .unwrap();
  }
  store
}

/// Echoes a fixed slice of live ids; keeps the oracle cost near zero so
/// the benchmark measures resolution, not the stub.
struct EchoOracle {
  product_ids: Vec<String>,
}

#[async_trait]
impl RankingOracle for EchoOracle {
  async fn rank(&self, _request: RankingRequest) -> anyhow::Result<RankingResponse> {
    Ok(RankingResponse {
      product_ids: self.product_ids.clone(),
    })
  }
}

// --- Benchmark Functions ---

fn bench_list_queries(c: &mut Criterion) {
  let mut group = c.benchmark_group("ListQueries");

  for store_size in [100usize, 1_000, 10_000].iter() {
    let store = seeded_store(*store_size);
    group.throughput(Throughput::Elements(*store_size as u64));

    group.bench_with_input(BenchmarkId::new("unfiltered", store_size), store_size, |b, _| {
      let filter = ProductFilter::new();
      b.iter(|| swapmart::catalog::list(&store, &filter));
    });

    group.bench_with_input(BenchmarkId::new("search", store_size), store_size, |b, _| {
      let filter = ProductFilter::new().search("number 42");
      b.iter(|| swapmart::catalog::list(&store, &filter));
    });

    group.bench_with_input(BenchmarkId::new("category_and_owner", store_size), store_size, |b, _| {
      let filter = ProductFilter::new()
        .category(CategoryFilter::Only(Category::Books))
        .owner("user3");
      b.iter(|| swapmart::catalog::list(&store, &filter));
    });
  }
  group.finish();
}

fn bench_recommendation_resolution(c: &mut Criterion) {
  let mut group = c.benchmark_group("RecommendationResolution");
  let rt = Runtime::new().unwrap();

  for store_size in [100usize, 1_000].iter() {
    let store = seeded_store(*store_size);
    let live_ids: Vec<String> = store.all().iter().take(10).map(|p| p.id.to_string()).collect();
    let history = BrowsingHistory::from_ids(store.all().iter().take(3).map(|p| p.id));
    let recommender = Recommender::new(Arc::new(EchoOracle {
      product_ids: live_ids,
    }));

    group.bench_with_input(BenchmarkId::new("resolve_ten", store_size), store_size, |b, _| {
      b.iter(|| rt.block_on(recommender.recommend("bench-user", &history, &store)));
    });
  }
  group.finish();
}

criterion_group!(benches, bench_list_queries, bench_recommendation_resolution);
criterion_main!(benches);
