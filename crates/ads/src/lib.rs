//! Ad preparation against an ads platform. Nothing is submitted: the only
//! publisher is a dry run that logs what would have been created.

pub mod batch;
pub mod publisher;

pub use batch::{
    AdStatus, BatchAdCreator, BatchItem, BatchItemError, BatchReport, CreativeInput, PreparedAd,
};
pub use publisher::{AdPublisher, DryRunPublisher, PublishReceipt};
