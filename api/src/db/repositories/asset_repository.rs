// Asset database operations implementation
// All queries go through SeaORM, no raw SQL.

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::db::error::DbError;
use crate::db::filter::AssetFilter;
use crate::entity::assets::{ActiveModel, Column, Entity as Assets, Model};

/// Repository for asset database operations
pub struct AssetRepository {
    conn: DatabaseConnection,
}

impl AssetRepository {
    /// Creates a new asset repository with database connection
    pub fn new(conn: DatabaseConnection) -> Self {
        AssetRepository { conn }
    }

    /// Retrieves one page of assets matching the filter, newest first
    pub async fn find_paginated(
        &self,
        filter: &AssetFilter,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<Model>, DbError> {
        Assets::find()
            .filter(filter.condition())
            .order_by_desc(Column::CreatedAt)
            .offset(offset)
            .limit(limit)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Counts assets matching the filter
    pub async fn count(&self, filter: &AssetFilter) -> Result<u64, DbError> {
        Assets::find()
            .filter(filter.condition())
            .count(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Retrieves an asset by id
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Model>, DbError> {
        Assets::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Inserts a new asset and returns the persisted row
    pub async fn insert(&self, asset: ActiveModel) -> Result<Model, DbError> {
        asset.insert(&self.conn).await.map_err(Into::into)
    }

    /// Applies an update built from an existing row and returns the result
    pub async fn update(&self, asset: ActiveModel) -> Result<Model, DbError> {
        asset.update(&self.conn).await.map_err(Into::into)
    }

    /// Deletes an asset by id, returning the number of rows removed
    pub async fn delete_by_id(&self, id: i32) -> Result<u64, DbError> {
        let result = Assets::delete_by_id(id).exec(&self.conn).await?;
        Ok(result.rows_affected)
    }
}
