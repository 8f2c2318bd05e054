// swapmart/src/oracle/media.rs

//! The image-enhancement oracle. Unlike ranking this is a foreground,
//! user-initiated action: failures are surfaced as a descriptive error
//! (wrapped with context) and the operation is retryable by re-invoking.

use crate::error::{CatalogError, CatalogResult};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceRequest {
  /// The product photo as a data URI ("data:<mimetype>;base64,<data>").
  pub photo_data_uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceResponse {
  pub enhanced_photo_data_uri: String,
}

#[async_trait]
pub trait ImageEnhancer: Send + Sync {
  async fn enhance(&self, request: EnhanceRequest) -> anyhow::Result<EnhanceResponse>;
}

/// Runs the enhancement oracle and maps its failure into the surfaced
/// `CatalogError::Enhancement` variant.
#[instrument(name = "oracle::enhance_image", skip(enhancer, photo_data_uri), fields(payload_len = photo_data_uri.len()))]
pub async fn enhance_image(enhancer: &dyn ImageEnhancer, photo_data_uri: &str) -> CatalogResult<String> {
  let request = EnhanceRequest {
    photo_data_uri: photo_data_uri.to_string(),
  };
  match enhancer.enhance(request).await {
    Ok(response) => {
      info!("Image enhanced.");
      Ok(response.enhanced_photo_data_uri)
    }
    Err(source) => Err(CatalogError::Enhancement {
      source: source.context("image enhancement oracle call failed"),
    }),
  }
}
