// Asset business logic: list pagination, CRUD and the stats aggregate

use std::sync::Arc;

use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::config::TypeCatalog;
use crate::db::filter::AssetFilter;
use crate::db::repositories::AssetRepository;
use crate::entity::assets::ActiveModel;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    AssetInput, AssetListResponse, AssetResponse, AssetStatus, ListAssetsQuery, MessageResponse,
    StatsResponse,
};

/// Service for asset-related business logic
pub struct AssetService {
    repo: Arc<AssetRepository>,
    catalog: TypeCatalog,
}

impl AssetService {
    /// Creates a new asset service instance
    pub fn new(repo: Arc<AssetRepository>, catalog: TypeCatalog) -> Self {
        Self { repo, catalog }
    }

    /// Retrieves one page of assets with the total and page count for the
    /// active filter
    pub async fn list(&self, query: &ListAssetsQuery) -> ApiResult<AssetListResponse> {
        let page = query.page();
        let limit = query.limit();
        let offset = (page - 1) * limit;

        let filter = AssetFilter {
            search: query.search.clone(),
            asset_type: query.asset_type.clone(),
            status: query.status.clone(),
        };

        let (total, assets) = tokio::try_join!(
            self.repo.count(&filter),
            self.repo.find_paginated(&filter, limit, offset),
        )?;

        // An empty result still reports one page
        let pages = total.div_ceil(limit).max(1);

        Ok(AssetListResponse {
            data: assets.into_iter().map(Into::into).collect(),
            total,
            page,
            pages,
            limit,
        })
    }

    /// Retrieves a single asset by id
    pub async fn get(&self, id: i32) -> ApiResult<AssetResponse> {
        let asset = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Asset not found".to_string()))?;

        Ok(asset.into())
    }

    /// Validates and inserts a new asset
    pub async fn create(&self, input: AssetInput) -> ApiResult<AssetResponse> {
        let mut problems = Vec::new();

        let name = trimmed(&input.name);
        if name.is_none() {
            problems.push("name is required".to_string());
        }

        let asset_type = trimmed(&input.asset_type);
        match &asset_type {
            None => problems.push("type is required".to_string()),
            Some(t) if !self.catalog.contains(t) => {
                problems.push(format!("type '{t}' is not an allowed category"));
            }
            _ => {}
        }

        let asset_code = trimmed(&input.asset_code);
        if asset_code.is_none() {
            problems.push("assetCode is required".to_string());
        }

        let status = match trimmed(&input.status) {
            None => AssetStatus::Active,
            Some(s) => match AssetStatus::parse(&s) {
                Some(status) => status,
                None => {
                    problems.push(format!("status '{s}' must be Active or Inactive"));
                    AssetStatus::Active
                }
            },
        };

        if !problems.is_empty() {
            return Err(ApiError::Validation(format!(
                "Validation failed: {}",
                problems.join(", ")
            )));
        }

        let now = Utc::now();
        let asset = ActiveModel {
            id: NotSet,
            name: Set(name.unwrap_or_default()),
            asset_type: Set(asset_type.unwrap_or_default()),
            status: Set(status.as_str().to_string()),
            asset_code: Set(asset_code.unwrap_or_default()),
            serial: Set(input.serial),
            department: Set(input.department),
            assigned_to: Set(input.assigned_to),
            location: Set(input.location),
            ip_address: Set(input.ip_address),
            network: Set(input.network),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let created = self.repo.insert(asset).await?;
        Ok(created.into())
    }

    /// Applies a partial update to an existing asset and returns the full
    /// updated record
    pub async fn update(&self, id: i32, input: AssetInput) -> ApiResult<AssetResponse> {
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Asset not found".to_string()))?;

        let mut problems = Vec::new();

        if let Some(name) = &input.name {
            if name.trim().is_empty() {
                problems.push("name cannot be empty".to_string());
            }
        }
        if let Some(t) = &input.asset_type {
            if !self.catalog.contains(t.trim()) {
                problems.push(format!("type '{}' is not an allowed category", t.trim()));
            }
        }
        if let Some(code) = &input.asset_code {
            if code.trim().is_empty() {
                problems.push("assetCode cannot be empty".to_string());
            }
        }
        if let Some(s) = &input.status {
            if AssetStatus::parse(s.trim()).is_none() {
                problems.push(format!("status '{}' must be Active or Inactive", s.trim()));
            }
        }

        if !problems.is_empty() {
            return Err(ApiError::Validation(format!(
                "Validation failed: {}",
                problems.join(", ")
            )));
        }

        let mut asset: ActiveModel = existing.into();
        if let Some(name) = input.name {
            asset.name = Set(name);
        }
        if let Some(asset_type) = input.asset_type {
            asset.asset_type = Set(asset_type.trim().to_string());
        }
        if let Some(status) = input.status {
            asset.status = Set(status.trim().to_string());
        }
        if let Some(code) = input.asset_code {
            asset.asset_code = Set(code);
        }
        if let Some(serial) = input.serial {
            asset.serial = Set(Some(serial));
        }
        if let Some(department) = input.department {
            asset.department = Set(Some(department));
        }
        if let Some(assigned_to) = input.assigned_to {
            asset.assigned_to = Set(Some(assigned_to));
        }
        if let Some(location) = input.location {
            asset.location = Set(Some(location));
        }
        if let Some(ip_address) = input.ip_address {
            asset.ip_address = Set(Some(ip_address));
        }
        if let Some(network) = input.network {
            asset.network = Set(Some(network));
        }
        asset.updated_at = Set(Utc::now());

        let updated = self.repo.update(asset).await?;
        Ok(updated.into())
    }

    /// Deletes an asset by id
    pub async fn delete(&self, id: i32) -> ApiResult<MessageResponse> {
        let deleted = self.repo.delete_by_id(id).await?;

        if deleted == 0 {
            return Err(ApiError::NotFound("Asset not found".to_string()));
        }

        Ok(MessageResponse {
            message: "Asset deleted".to_string(),
        })
    }

    /// Computes the dashboard aggregate. Seven independent counts issued
    /// concurrently with no shared snapshot: under concurrent writes the
    /// buckets may not sum to the total.
    pub async fn stats(&self) -> ApiResult<StatsResponse> {
        let (total, total_pcs, total_printers, total_cctv, total_other, active, inactive) = tokio::try_join!(
            self.repo.count(&AssetFilter::default()),
            self.repo.count(&AssetFilter::by_type("PC")),
            self.repo.count(&AssetFilter::by_type("Printer")),
            self.repo.count(&AssetFilter::by_type("CCTV")),
            self.repo.count(&AssetFilter::by_type("Other")),
            self.repo.count(&AssetFilter::by_status(AssetStatus::Active.as_str())),
            self.repo.count(&AssetFilter::by_status(AssetStatus::Inactive.as_str())),
        )?;

        Ok(StatsResponse {
            total,
            total_pcs,
            total_printers,
            total_cctv,
            total_other,
            active,
            inactive,
        })
    }
}

/// Trims an optional field, treating blank input as absent.
fn trimmed(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::assets;
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult};
    use std::collections::BTreeMap;

    fn service(db: DatabaseConnection) -> AssetService {
        AssetService::new(Arc::new(AssetRepository::new(db)), TypeCatalog::default())
    }

    fn count_row(n: i64) -> BTreeMap<&'static str, sea_orm::Value> {
        let mut row = BTreeMap::new();
        row.insert("num_items", sea_orm::Value::BigInt(Some(n)));
        row
    }

    fn sample(id: i32) -> assets::Model {
        let now = Utc::now();
        assets::Model {
            id,
            name: format!("Workstation {id}"),
            asset_type: "PC".to_string(),
            status: "Active".to_string(),
            asset_code: format!("IT-{id:04}"),
            serial: Some(format!("SN-{id}")),
            department: Some("IT Servers".to_string()),
            assigned_to: None,
            location: Some("HQ".to_string()),
            ip_address: None,
            network: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn list_reports_page_math() {
        let rows: Vec<assets::Model> = (6..=10).map(sample).collect();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(12)]])
            .append_query_results([rows])
            .into_connection();

        let query = ListAssetsQuery {
            page: Some("2".to_string()),
            limit: Some("5".to_string()),
            ..Default::default()
        };
        let result = service(db).list(&query).await.unwrap();

        assert_eq!(result.data.len(), 5);
        assert_eq!(result.total, 12);
        assert_eq!(result.page, 2);
        assert_eq!(result.pages, 3);
        assert_eq!(result.limit, 5);
    }

    #[tokio::test]
    async fn empty_listing_still_reports_one_page() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(0)]])
            .append_query_results([Vec::<assets::Model>::new()])
            .into_connection();

        let result = service(db).list(&ListAssetsQuery::default()).await.unwrap();

        assert_eq!(result.total, 0);
        assert_eq!(result.pages, 1);
        assert!(result.data.is_empty());
    }

    #[tokio::test]
    async fn get_missing_asset_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<assets::Model>::new()])
            .into_connection();

        let err = service(db).get(99).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn create_rejects_missing_required_fields() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let input = AssetInput {
            serial: Some("SN-1".to_string()),
            ..Default::default()
        };
        let err = service(db).create(input).await.unwrap_err();

        match err {
            ApiError::Validation(message) => {
                assert!(message.contains("name is required"));
                assert!(message.contains("type is required"));
                assert!(message.contains("assetCode is required"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_rejects_unknown_type_and_status() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let input = AssetInput {
            name: Some("Cam".to_string()),
            asset_type: Some("Drone".to_string()),
            status: Some("Broken".to_string()),
            asset_code: Some("IT-0001".to_string()),
            ..Default::default()
        };
        let err = service(db).create(input).await.unwrap_err();

        match err {
            ApiError::Validation(message) => {
                assert!(message.contains("'Drone' is not an allowed category"));
                assert!(message.contains("'Broken' must be Active or Inactive"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_returns_persisted_asset() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sample(1)]])
            .into_connection();

        let input = AssetInput {
            name: Some("Workstation 1".to_string()),
            asset_type: Some("PC".to_string()),
            asset_code: Some("IT-0001".to_string()),
            ..Default::default()
        };
        let created = service(db).create(input).await.unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.name, "Workstation 1");
        assert_eq!(created.status, "Active");
    }

    #[tokio::test]
    async fn update_missing_asset_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<assets::Model>::new()])
            .into_connection();

        let err = service(db).update(7, AssetInput::default()).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_applies_partial_fields() {
        let mut updated = sample(3);
        updated.name = "Renamed".to_string();
        updated.status = "Inactive".to_string();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sample(3)]])
            .append_query_results([vec![updated]])
            .into_connection();

        let input = AssetInput {
            name: Some("Renamed".to_string()),
            status: Some("Inactive".to_string()),
            ..Default::default()
        };
        let result = service(db).update(3, input).await.unwrap();

        assert_eq!(result.name, "Renamed");
        assert_eq!(result.status, "Inactive");
        assert_eq!(result.asset_code, "IT-0003");
    }

    #[tokio::test]
    async fn delete_twice_reports_not_found_second_time() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();

        let service = service(db);
        let first = service.delete(4).await.unwrap();
        assert_eq!(first.message, "Asset deleted");

        let second = service.delete(4).await.unwrap_err();
        assert!(matches!(second, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn stats_maps_the_seven_counts_in_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(20)]])
            .append_query_results([vec![count_row(8)]])
            .append_query_results([vec![count_row(4)]])
            .append_query_results([vec![count_row(3)]])
            .append_query_results([vec![count_row(1)]])
            .append_query_results([vec![count_row(15)]])
            .append_query_results([vec![count_row(5)]])
            .into_connection();

        let stats = service(db).stats().await.unwrap();

        assert_eq!(stats.total, 20);
        assert_eq!(stats.total_pcs, 8);
        assert_eq!(stats.total_printers, 4);
        assert_eq!(stats.total_cctv, 3);
        assert_eq!(stats.total_other, 1);
        assert_eq!(stats.active, 15);
        assert_eq!(stats.inactive, 5);
    }
}
