// demos/marketplace_app/src/services/enhancer_mock.rs

//! Stand-in for the image-enhancement model. Validates the data-URI shape
//! the real model expects and echoes a tagged copy back.

use async_trait::async_trait;
use swapmart::{EnhanceRequest, EnhanceResponse, ImageEnhancer};
use tracing::{info, instrument, warn};

pub struct MockImageEnhancer;

#[async_trait]
impl ImageEnhancer for MockImageEnhancer {
  #[instrument(name = "mock_oracle::enhance", skip(self, request), fields(payload_len = request.photo_data_uri.len()))]
  async fn enhance(&self, request: EnhanceRequest) -> anyhow::Result<EnhanceResponse> {
    tokio::time::sleep(std::time::Duration::from_millis(100)).await; // Simulate processing

    // The real model only accepts "data:<mimetype>;base64,<data>" URIs;
    // reject anything else the way it would.
    if !request.photo_data_uri.starts_with("data:") || !request.photo_data_uri.contains(";base64,") {
      warn!("Rejected enhancement request: payload is not a base64 data URI.");
      anyhow::bail!("photoDataUri must be a base64-encoded data URI");
    }

    info!("Mock enhancement succeeded.");
    Ok(EnhanceResponse {
      enhanced_photo_data_uri: format!("{}#enhanced", request.photo_data_uri),
    })
  }
}
