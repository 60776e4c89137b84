use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::models::{
    AssetInput, AssetListResponse, AssetResponse, ListAssetsQuery, MessageResponse, StatsResponse,
};

/// Handler for GET /api/assets
pub async fn list_assets(
    State(state): State<AppState>,
    Query(query): Query<ListAssetsQuery>,
) -> ApiResult<Json<AssetListResponse>> {
    Ok(Json(state.list(&query).await?))
}

/// Handler for GET /api/assets/stats
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<Json<StatsResponse>> {
    Ok(Json(state.stats().await?))
}

/// Handler for GET /api/assets/{id}
pub async fn get_asset(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<AssetResponse>> {
    Ok(Json(state.get(parse_id(&id)?).await?))
}

/// Handler for POST /api/assets
pub async fn create_asset(
    State(state): State<AppState>,
    Json(input): Json<AssetInput>,
) -> ApiResult<(StatusCode, Json<AssetResponse>)> {
    let created = state.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Handler for PUT /api/assets/{id}
pub async fn update_asset(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<AssetInput>,
) -> ApiResult<Json<AssetResponse>> {
    Ok(Json(state.update(parse_id(&id)?, input).await?))
}

/// Handler for DELETE /api/assets/{id}
pub async fn delete_asset(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    Ok(Json(state.delete(parse_id(&id)?).await?))
}

/// Record ids are integers; anything else is a client fault, not a lookup
/// miss.
fn parse_id(raw: &str) -> ApiResult<i32> {
    raw.parse::<i32>()
        .map_err(|_| ApiError::InvalidId(format!("Invalid asset id: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_numeric_id_is_rejected() {
        assert!(parse_id("42").is_ok());
        assert!(matches!(parse_id("stats"), Err(ApiError::InvalidId(_))));
        assert!(matches!(parse_id("4.2"), Err(ApiError::InvalidId(_))));
    }
}
