use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use creative_core::error::{CreativeError, CreativeResult};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::publisher::{AdPublisher, DryRunPublisher, PublishReceipt};

/// Fields the batch reads from each creative. Everything else is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreativeInput {
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cta: Option<String>,
}

/// Delivery status an ad is created with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdStatus {
    Paused,
}

impl fmt::Display for AdStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdStatus::Paused => f.write_str("PAUSED"),
        }
    }
}

/// One entry that could not be prepared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchItemError {
    /// 1-based position in the source file.
    pub index: usize,
    pub message: String,
}

impl fmt::Display for BatchItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// A batch entry in source order, either prepared or failed.
#[derive(Debug, Clone, Copy)]
pub enum BatchItem<'a> {
    Prepared(&'a PreparedAd),
    Failed(&'a BatchItemError),
}

impl BatchItem<'_> {
    pub fn index(&self) -> usize {
        match self {
            BatchItem::Prepared(ad) => ad.index,
            BatchItem::Failed(err) => err.index,
        }
    }
}

/// An ad ready for submission to an ad set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreparedAd {
    /// 1-based position in the source file.
    pub index: usize,
    pub name: String,
    pub adset_id: String,
    pub status: AdStatus,
    pub headline: Option<String>,
    pub description: Option<String>,
    pub cta: Option<String>,
    pub prepared_at: DateTime<Utc>,
}

impl PreparedAd {
    /// `index` is 1-based; the name is `{headline}_{index}`, `Ad` standing in
    /// for a missing headline.
    pub fn from_input(input: CreativeInput, adset_id: &str, index: usize) -> Self {
        let name = format!("{}_{index}", input.headline.as_deref().unwrap_or("Ad"));
        Self {
            index,
            name,
            adset_id: adset_id.to_string(),
            status: AdStatus::Paused,
            headline: input.headline,
            description: input.description,
            cta: input.cta,
            prepared_at: Utc::now(),
        }
    }
}

/// Outcome of one batch run.
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub run_id: Uuid,
    pub adset_id: String,
    pub prepared: Vec<PreparedAd>,
    pub receipts: Vec<PublishReceipt>,
    pub errors: Vec<BatchItemError>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl BatchReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of entries in the source array.
    pub fn total(&self) -> usize {
        self.prepared.len() + self.errors.len()
    }

    /// Prepared ads and failures merged back into source order.
    pub fn items(&self) -> Vec<BatchItem<'_>> {
        let mut items: Vec<BatchItem<'_>> = self
            .prepared
            .iter()
            .map(BatchItem::Prepared)
            .chain(self.errors.iter().map(BatchItem::Failed))
            .collect();
        items.sort_by_key(BatchItem::index);
        items
    }
}

/// Walks a list of creatives, prepares one ad per entry and hands each to
/// the publisher. One bad entry never stops the rest.
#[derive(Clone)]
pub struct BatchAdCreator {
    publisher: Arc<dyn AdPublisher>,
}

impl BatchAdCreator {
    pub fn new(publisher: Arc<dyn AdPublisher>) -> Self {
        Self { publisher }
    }

    pub fn dry_run() -> Self {
        Self::new(Arc::new(DryRunPublisher::new()))
    }

    /// Run the batch over a parsed creatives document.
    ///
    /// Fails up front if `creatives` is not a JSON array. Per-entry
    /// failures are collected in [`BatchReport::errors`].
    pub fn run(&self, adset_id: &str, creatives: &serde_json::Value) -> CreativeResult<BatchReport> {
        let entries = creatives.as_array().ok_or_else(|| {
            CreativeError::Validation("creatives_file must contain a JSON array".to_string())
        })?;

        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        info!(
            %run_id,
            adset_id,
            platform = self.publisher.platform(),
            count = entries.len(),
            "starting ad batch"
        );

        let mut prepared = Vec::with_capacity(entries.len());
        let mut receipts = Vec::with_capacity(entries.len());
        let mut errors = Vec::new();

        for (offset, entry) in entries.iter().enumerate() {
            let index = offset + 1;
            match self.prepare_one(adset_id, entry, index) {
                Ok((ad, receipt)) => {
                    prepared.push(ad);
                    receipts.push(receipt);
                }
                Err(e) => {
                    error!(%run_id, index, error = %e, "ad preparation failed");
                    errors.push(BatchItemError {
                        index,
                        message: format!("Failed to create ad {index}: {e}"),
                    });
                }
            }
        }

        info!(
            %run_id,
            prepared = prepared.len(),
            errors = errors.len(),
            "ad batch complete"
        );

        Ok(BatchReport {
            run_id,
            adset_id: adset_id.to_string(),
            prepared,
            receipts,
            errors,
            started_at,
            finished_at: Utc::now(),
        })
    }

    fn prepare_one(
        &self,
        adset_id: &str,
        entry: &serde_json::Value,
        index: usize,
    ) -> CreativeResult<(PreparedAd, PublishReceipt)> {
        let input = CreativeInput::deserialize(entry)
            .map_err(|e| CreativeError::InvalidEntry(e.to_string()))?;
        let ad = PreparedAd::from_input(input, adset_id, index);
        let receipt = self.publisher.publish(&ad)?;
        Ok((ad, receipt))
    }
}
