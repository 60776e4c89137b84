// HTTP endpoint handlers

mod assets;
mod health;

pub use assets::{create_asset, delete_asset, get_asset, get_stats, list_assets, update_asset};
pub use health::health_check;

use std::sync::Arc;

use crate::services::AssetService;

/// Shared application state passed to every handler
pub type AppState = Arc<AssetService>;
