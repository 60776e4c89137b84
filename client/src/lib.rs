//! Client-side library for the IT asset manager: a typed HTTP client for
//! the asset API plus the synchronization controller that owns the
//! UI-facing state. Rendering is left to the embedding presentation
//! layer, which sends [`UiEvent`]s in and observes [`ViewState`]
//! snapshots out.

pub mod api;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod http;
pub mod models;

pub use api::AssetApi;
pub use controller::{ControllerHandle, Notice, NoticeKind, SyncController, UiEvent, ViewState};
pub use error::ClientError;
pub use http::HttpAssetApi;
