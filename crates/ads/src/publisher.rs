//! Ad publisher implementations.
//! Each publisher hands a prepared ad to an ads platform.

use creative_core::error::CreativeResult;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::batch::PreparedAd;

/// Trait for ads-platform publishers.
pub trait AdPublisher: Send + Sync {
    fn platform(&self) -> &'static str;
    fn publish(&self, ad: &PreparedAd) -> CreativeResult<PublishReceipt>;
}

/// What a publisher reports back for one ad.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublishReceipt {
    pub ad_name: String,
    /// Platform-assigned id. Always `None` for dry runs.
    pub remote_id: Option<String>,
    pub dry_run: bool,
}

// ─── Dry run ────────────────────────────────────────────────────────────────

/// Logs the ad and returns a receipt without contacting the platform.
#[derive(Debug, Clone, Default)]
pub struct DryRunPublisher;

impl DryRunPublisher {
    pub fn new() -> Self {
        Self
    }
}

impl AdPublisher for DryRunPublisher {
    fn platform(&self) -> &'static str {
        "meta_ads"
    }

    fn publish(&self, ad: &PreparedAd) -> CreativeResult<PublishReceipt> {
        info!(
            platform = self.platform(),
            name = %ad.name,
            adset_id = %ad.adset_id,
            status = %ad.status,
            "[DRY RUN] ad prepared, not submitted"
        );

        Ok(PublishReceipt {
            ad_name: ad.name.clone(),
            remote_id: None,
            dry_run: true,
        })
    }
}
