// Wire types shared by the HTTP client and the sync controller

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single inventory record as served by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
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

/// One page of the asset listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetPage {
    pub data: Vec<Asset>,
    pub total: u64,
    pub page: u64,
    pub pages: u64,
    pub limit: u64,
}

/// The dashboard aggregate. The four type buckets are a pinned subset of
/// the category catalog and need not sum to `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
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

/// Outgoing asset fields for create and update requests. Absent fields are
/// omitted from the body, so the same shape serves partial updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
}

/// Parameters for one listing request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListQuery {
    pub page: u64,
    pub limit: u64,
    pub search: Option<String>,
    pub asset_type: Option<String>,
    pub status: Option<String>,
}
