// HTTP implementation of the asset API interface

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::api::AssetApi;
use crate::error::ClientError;
use crate::models::{Asset, AssetInput, AssetPage, ListQuery, Stats};

/// Client for the asset manager REST API, backed by reqwest.
pub struct HttpAssetApi {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl HttpAssetApi {
    /// Creates a client for an API rooted at `base_url`, e.g.
    /// `http://localhost:5000/api`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| ClientError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(HttpAssetApi {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decodes a success body, or maps an error status and its `{message}`
    /// body onto `ClientError::Api`.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return response.json::<T>().await.map_err(Into::into);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl AssetApi for HttpAssetApi {
    async fn list_assets(&self, query: &ListQuery) -> Result<AssetPage, ClientError> {
        let mut params: Vec<(&str, String)> = vec![
            ("page", query.page.to_string()),
            ("limit", query.limit.to_string()),
        ];
        if let Some(search) = &query.search {
            if !search.is_empty() {
                params.push(("search", search.clone()));
            }
        }
        if let Some(asset_type) = &query.asset_type {
            params.push(("type", asset_type.clone()));
        }
        if let Some(status) = &query.status {
            params.push(("status", status.clone()));
        }

        let response = self
            .client
            .get(self.url("/assets"))
            .query(&params)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn fetch_stats(&self) -> Result<Stats, ClientError> {
        let response = self.client.get(self.url("/assets/stats")).send().await?;
        Self::decode(response).await
    }

    async fn fetch_asset(&self, id: i32) -> Result<Asset, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/assets/{id}")))
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn create_asset(&self, input: &AssetInput) -> Result<Asset, ClientError> {
        let response = self
            .client
            .post(self.url("/assets"))
            .json(input)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn update_asset(&self, id: i32, input: &AssetInput) -> Result<Asset, ClientError> {
        let response = self
            .client
            .put(self.url(&format!("/assets/{id}")))
            .json(input)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn delete_asset(&self, id: i32) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/assets/{id}")))
            .send()
            .await?;
        // The body is a bare {message} confirmation
        let _: serde_json::Value = Self::decode(response).await?;
        Ok(())
    }
}
