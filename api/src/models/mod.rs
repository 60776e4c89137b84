// API request/response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::assets;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

/// Query parameters for GET /api/assets. page and limit arrive as query
/// strings; values that do not parse fall back to the defaults, values
/// below 1 are clamped to 1.
#[derive(Debug, Deserialize, Default)]
pub struct ListAssetsQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: Option<String>,
    pub status: Option<String>,
}

impl ListAssetsQuery {
    /// 1-based page number after coercion.
    pub fn page(&self) -> u64 {
        coerce_positive(self.page.as_deref(), DEFAULT_PAGE)
    }

    /// Page size after coercion.
    pub fn limit(&self) -> u64 {
        coerce_positive(self.limit.as_deref(), DEFAULT_LIMIT)
    }
}

fn coerce_positive(raw: Option<&str>, default: u64) -> u64 {
    match raw {
        None => default,
        Some(value) => match value.trim().parse::<i64>() {
            Ok(parsed) if parsed >= 1 => parsed as u64,
            Ok(_) => 1,
            Err(_) => default,
        },
    }
}

/// Fixed status set. Stored as text but validated at the service boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetStatus {
    Active,
    Inactive,
}

impl AssetStatus {
    pub fn parse(value: &str) -> Option<AssetStatus> {
        match value {
            "Active" => Some(AssetStatus::Active),
            "Inactive" => Some(AssetStatus::Inactive),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::Active => "Active",
            AssetStatus::Inactive => "Inactive",
        }
    }
}

/// Incoming asset fields for create and update. Everything is optional so
/// the same shape serves PUT with a partial body; create enforces the
/// required set at the service boundary.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetInput {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: Option<String>,
    pub status: Option<String>,
    pub asset_code: Option<String>,
    pub serial: Option<String>,
    pub department: Option<String>,
    pub assigned_to: Option<String>,
    pub location: Option<String>,
    pub ip_address: Option<String>,
    pub network: Option<String>,
}

/// A single asset as returned over the wire
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetResponse {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub status: String,
    pub asset_code: String,
    pub serial: Option<String>,
    pub department: Option<String>,
    pub assigned_to: Option<String>,
    pub location: Option<String>,
    pub ip_address: Option<String>,
    pub network: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<assets::Model> for AssetResponse {
    fn from(model: assets::Model) -> Self {
        AssetResponse {
            id: model.id,
            name: model.name,
            asset_type: model.asset_type,
            status: model.status,
            asset_code: model.asset_code,
            serial: model.serial,
            department: model.department,
            assigned_to: model.assigned_to,
            location: model.location,
            ip_address: model.ip_address,
            network: model.network,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Response structure for GET /api/assets
#[derive(Debug, Serialize)]
pub struct AssetListResponse {
    pub data: Vec<AssetResponse>,
    pub total: u64,
    pub page: u64,
    pub pages: u64,
    pub limit: u64,
}

/// Response structure for GET /api/assets/stats. The four type buckets are
/// a pinned subset of the catalog and need not sum to total.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total: u64,
    #[serde(rename = "totalPCs")]
    pub total_pcs: u64,
    #[serde(rename = "totalPrinters")]
    pub total_printers: u64,
    #[serde(rename = "totalCCTV")]
    pub total_cctv: u64,
    #[serde(rename = "totalOther")]
    pub total_other: u64,
    pub active: u64,
    pub inactive: u64,
}

/// Confirmation body for DELETE /api/assets/{id}
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
