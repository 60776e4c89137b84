use async_trait::async_trait;

use crate::error::ClientError;
use crate::models::{Asset, AssetInput, AssetPage, ListQuery, Stats};

/// Interface to the asset backend. The sync controller is generic over
/// this so tests can drive it against an in-memory implementation.
#[async_trait]
pub trait AssetApi: Send + Sync + 'static {
    /// Fetches one page of the asset listing.
    async fn list_assets(&self, query: &ListQuery) -> Result<AssetPage, ClientError>;

    /// Fetches the dashboard aggregate.
    async fn fetch_stats(&self) -> Result<Stats, ClientError>;

    /// Fetches a single asset by id.
    async fn fetch_asset(&self, id: i32) -> Result<Asset, ClientError>;

    /// Creates a new asset and returns the persisted record.
    async fn create_asset(&self, input: &AssetInput) -> Result<Asset, ClientError>;

    /// Applies a partial update and returns the full updated record.
    async fn update_asset(&self, id: i32, input: &AssetInput) -> Result<Asset, ClientError>;

    /// Deletes an asset by id.
    async fn delete_asset(&self, id: i32) -> Result<(), ClientError>;
}
