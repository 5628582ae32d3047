//! Service layer over the transport
//!
//! Items stay `serde_json::Value`; field mappings belong to callers.

use crate::application::resources::Resource;
use crate::config::Config;
use crate::error::AppError;
use crate::transport::http_client::ConcurHttpClient;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// CRUD operations over the supported resources
#[async_trait]
pub trait ResourceService: Send + Sync {
    /// Lists every item of a resource, accumulated across all pages
    async fn list(&self, resource: Resource) -> Result<Vec<Value>, AppError>;

    /// Fetches a single item by ID
    async fn fetch(&self, resource: Resource, id: &str) -> Result<Value, AppError>;

    /// Creates an item and returns the provider's response body
    async fn create(&self, resource: Resource, body: &Value) -> Result<Value, AppError>;

    /// Updates an item by ID and returns the provider's response body
    async fn update(&self, resource: Resource, id: &str, body: &Value) -> Result<Value, AppError>;

    /// Deletes an item by ID
    async fn remove(&self, resource: Resource, id: &str) -> Result<(), AppError>;
}

/// Implementation of the resource service
pub struct ResourceServiceImpl<C: ConcurHttpClient> {
    config: Arc<Config>,
    client: Arc<C>,
}

impl<C: ConcurHttpClient> ResourceServiceImpl<C> {
    /// Creates a new instance of the resource service
    pub fn new(config: Arc<Config>, client: Arc<C>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl<C: ConcurHttpClient + 'static> ResourceService for ResourceServiceImpl<C> {
    async fn list(&self, resource: Resource) -> Result<Vec<Value>, AppError> {
        let path = format!("{}?limit={}", resource.endpoint(), self.config.page_size);
        debug!("listing {} via {}", resource, path);
        self.client.fetch_all(&path, &resource.schema()).await
    }

    async fn fetch(&self, resource: Resource, id: &str) -> Result<Value, AppError> {
        self.client
            .request(Method::GET, &resource.item_path(id), None, None)
            .await?
            .json()
    }

    async fn create(&self, resource: Resource, body: &Value) -> Result<Value, AppError> {
        self.client
            .request(Method::POST, resource.endpoint(), None, Some(body))
            .await?
            .json()
    }

    async fn update(&self, resource: Resource, id: &str, body: &Value) -> Result<Value, AppError> {
        self.client
            .request(Method::PUT, &resource.item_path(id), None, Some(body))
            .await?
            .json()
    }

    async fn remove(&self, resource: Resource, id: &str) -> Result<(), AppError> {
        let response = self
            .client
            .request(Method::DELETE, &resource.item_path(id), None, None)
            .await?;
        debug!("deleted {} {} (status {})", resource, id, response.status);
        Ok(())
    }
}
