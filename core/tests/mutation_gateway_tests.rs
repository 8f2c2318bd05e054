// tests/mutation_gateway_tests.rs
mod common;

use common::*;
use std::sync::Arc;
use swapmart::{Catalog, CatalogError, CatalogStore, Category, InMemoryCatalog, NewProduct, ProductFilter};

fn new_catalog() -> Catalog {
  Catalog::new(Arc::new(InMemoryCatalog::new()))
}

fn guitar_fields() -> NewProduct {
  NewProduct {
    title: "Guitar".to_string(),
    description: "A well-maintained acoustic guitar.".to_string(),
    category: Category::Other,
    price: 150.0,
    image_url: "https://example.com/guitar.jpg".to_string(),
  }
}

#[test]
fn create_then_lookup_then_owner_scoped_delete() {
  setup_tracing();
  let catalog = new_catalog();

  let created = catalog.create("u1", guitar_fields()).unwrap();

  let fetched = catalog.get(&created.id).expect("new product must be visible immediately");
  assert_eq!(fetched.id, created.id);
  assert_eq!(fetched.price, 150.0);
  assert_eq!(fetched.owner_id, "u1");
  assert_eq!(fetched.created_at, created.created_at);

  // Wrong owner: boolean refusal, no mutation, no information leak.
  assert!(!catalog.delete(&created.id, "u2"));
  assert!(catalog.get(&created.id).is_some());

  assert!(catalog.delete(&created.id, "u1"));
  assert!(catalog.get(&created.id).is_none());

  // Gone means gone: a second delete by the owner also reports false.
  assert!(!catalog.delete(&created.id, "u1"));
}

#[test]
fn created_products_list_newest_first() {
  setup_tracing();
  let catalog = new_catalog();

  for title in ["Alpha", "Bravo", "Charlie"] {
    let mut fields = guitar_fields();
    fields.title = title.to_string();
    catalog.create("u1", fields).unwrap();
  }

  let titles: Vec<String> = catalog
    .list(&ProductFilter::new())
    .into_iter()
    .map(|p| p.title)
    .collect();
  assert_eq!(titles, vec!["Charlie", "Bravo", "Alpha"]);
}

#[test]
fn validation_names_every_offending_field_and_mutates_nothing() {
  setup_tracing();
  let catalog = new_catalog();

  let mut fields = guitar_fields();
  fields.title = "   ".to_string();
  fields.price = -1.0;

  match catalog.create("u1", fields) {
    Err(CatalogError::Validation { fields }) => {
      assert_eq!(fields, vec!["title".to_string(), "price".to_string()]);
    }
    other => panic!("Expected validation failure, got {:?}", other),
  }
  assert!(catalog.store().is_empty(), "validation failure must not leave partial writes");
}

#[test]
fn non_finite_price_is_rejected() {
  setup_tracing();
  let catalog = new_catalog();

  for bad_price in [f64::NAN, f64::INFINITY, -0.5] {
    let mut fields = guitar_fields();
    fields.price = bad_price;
    assert!(matches!(
      catalog.create("u1", fields),
      Err(CatalogError::Validation { .. })
    ));
  }

  // Zero is a legal price.
  let mut fields = guitar_fields();
  fields.price = 0.0;
  assert!(catalog.create("u1", fields).is_ok());
}

#[test]
fn duplicate_id_insert_is_an_invariant_violation() {
  setup_tracing();
  let store = InMemoryCatalog::new();
  let first = product("Desk", "user2", Category::Furniture, 300.0, ts(0));
  let mut clone_with_same_id = product("Other Desk", "user2", Category::Furniture, 310.0, ts(1));
  clone_with_same_id.id = first.id;

  store.insert(first.clone()).unwrap();
  match store.insert(clone_with_same_id) {
    Err(CatalogError::DuplicateId { id }) => assert_eq!(id, first.id),
    other => panic!("Expected DuplicateId, got {:?}", other),
  }
  assert_eq!(store.len(), 1);
}
