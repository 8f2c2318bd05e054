// demos/marketplace_app/src/seed.rs

//! Demo listings inserted at startup when `SEED_CATALOG` is enabled.

use crate::errors::Result as AppResult;
use swapmart::{Catalog, Category, NewProduct};
use tracing::info;

struct SeedListing {
  owner_id: &'static str,
  title: &'static str,
  description: &'static str,
  category: Category,
  price: f64,
  image_seed: &'static str,
}

const LISTINGS: &[SeedListing] = &[
  SeedListing {
    owner_id: "user1",
    title: "Vintage Leather Jacket",
    description: "A stylish vintage leather jacket in excellent condition. Barely worn. Classic look.",
    category: Category::Clothing,
    price: 120.0,
    image_seed: "jacket",
  },
  SeedListing {
    owner_id: "user2",
    title: "Mid-Century Modern Armchair",
    description: "Beautifully restored mid-century modern armchair. A statement piece for any living room.",
    category: Category::Furniture,
    price: 450.0,
    image_seed: "armchair",
  },
  SeedListing {
    owner_id: "user1",
    title: "Wireless Noise-Cancelling Headphones",
    description: "High-quality wireless headphones with active noise cancellation. Long battery life.",
    category: Category::Electronics,
    price: 85.0,
    image_seed: "headphones",
  },
  SeedListing {
    owner_id: "user3",
    title: "The Great Gatsby - Hardcover",
    description: "A classic novel by F. Scott Fitzgerald. This is a beautiful hardcover edition.",
    category: Category::Books,
    price: 15.0,
    image_seed: "book",
  },
  SeedListing {
    owner_id: "user2",
    title: "Ceramic Dinnerware Set",
    description: "A complete set of ceramic dinnerware for four. Includes plates, bowls, and mugs.",
    category: Category::HomeGoods,
    price: 75.0,
    image_seed: "dinnerware",
  },
  SeedListing {
    owner_id: "user3",
    title: "Acoustic Guitar",
    description: "A well-maintained acoustic guitar, perfect for beginners or intermediate players.",
    category: Category::Other,
    price: 150.0,
    image_seed: "guitar",
  },
  SeedListing {
    owner_id: "user1",
    title: "Classic Denim Jeans",
    description: "Comfortable and durable denim jeans. Straight fit, size 32/32.",
    category: Category::Clothing,
    price: 40.0,
    image_seed: "jeans",
  },
  SeedListing {
    owner_id: "user2",
    title: "Antique Wooden Desk",
    description: "Solid oak desk with intricate carvings. Adds a touch of elegance to any home office.",
    category: Category::Furniture,
    price: 300.0,
    image_seed: "desk",
  },
];

pub fn seed_catalog(catalog: &Catalog) -> AppResult<()> {
  // Listings are created oldest-first, so the last seed sorts first in
  // newest-first listings, matching the demo data's intent.
  for listing in LISTINGS {
    catalog.create(
      listing.owner_id,
      NewProduct {
        title: listing.title.to_string(),
        description: listing.description.to_string(),
        category: listing.category,
        price: listing.price,
        image_url: format!("https://picsum.photos/seed/{}/600/400", listing.image_seed),
      },
    )?;
  }
  info!("Seeded catalog with {} demo listings.", LISTINGS.len());
  Ok(())
}
