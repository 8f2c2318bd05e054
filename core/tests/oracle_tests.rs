// tests/oracle_tests.rs
mod common;

use common::setup_tracing;
use swapmart::{enhance_image, CatalogError, EnhanceRequest, EnhanceResponse, ImageEnhancer};

use async_trait::async_trait;

struct EchoEnhancer;

#[async_trait]
impl ImageEnhancer for EchoEnhancer {
  async fn enhance(&self, request: EnhanceRequest) -> anyhow::Result<EnhanceResponse> {
    Ok(EnhanceResponse {
      enhanced_photo_data_uri: format!("{}#enhanced", request.photo_data_uri),
    })
  }
}

struct BrokenEnhancer;

#[async_trait]
impl ImageEnhancer for BrokenEnhancer {
  async fn enhance(&self, _request: EnhanceRequest) -> anyhow::Result<EnhanceResponse> {
    anyhow::bail!("model refused the request")
  }
}

#[tokio::test]
async fn successful_enhancement_returns_the_new_data_uri() {
  setup_tracing();
  let enhanced = enhance_image(&EchoEnhancer, "data:image/png;base64,AAAA").await.unwrap();
  assert_eq!(enhanced, "data:image/png;base64,AAAA#enhanced");
}

#[tokio::test]
async fn enhancement_failure_is_surfaced_with_context() {
  setup_tracing();
  // Unlike ranking, this failure must reach the caller: it is a
  // foreground user action and the UI shows the message.
  let err = enhance_image(&BrokenEnhancer, "data:image/png;base64,AAAA")
    .await
    .unwrap_err();
  match err {
    CatalogError::Enhancement { source } => {
      let chain = format!("{:#}", source);
      assert!(chain.contains("image enhancement oracle call failed"));
      assert!(chain.contains("model refused the request"));
    }
    other => panic!("Expected Enhancement error, got {:?}", other),
  }
}
