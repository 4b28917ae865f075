//! Feed source port trait

use async_trait::async_trait;

use crate::domain::entities::FeedPayload;
use crate::error::FeedError;

/// Where the latest broadcast comes from
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the current broadcast, bypassing any cache.
    ///
    /// Errors for transport failures, non-success statuses and bodies that
    /// are not JSON. An empty item list is not an error at this layer.
    async fn fetch_latest(&self) -> Result<FeedPayload, FeedError>;
}
