//! HTTP access to the catalog API.

use async_trait::async_trait;
use catalog_core::types::DbId;
use reqwest::{Client, Response};

use crate::error::ClientError;
use crate::model::{ListQuery, MessageBody, Product, ProductCreated, ProductDraft, ProductListPage};

/// The five product operations the screens need.
///
/// [`HttpProductApi`] is the real implementation; view models take any
/// implementation so they can run against a fake.
#[async_trait]
pub trait ProductApi: Send + Sync {
    async fn list(&self, query: &ListQuery) -> Result<ProductListPage, ClientError>;

    async fn get(&self, id: DbId) -> Result<Product, ClientError>;

    async fn create(&self, draft: &ProductDraft) -> Result<ProductCreated, ClientError>;

    /// Returns the server's confirmation message.
    async fn update(&self, id: DbId, draft: &ProductDraft) -> Result<String, ClientError>;

    /// Returns the server's confirmation message.
    async fn delete(&self, id: DbId) -> Result<String, ClientError>;
}

/// [`ProductApi`] over HTTP with reqwest.
#[derive(Debug, Clone)]
pub struct HttpProductApi {
    http: Client,
    base_url: String,
}

impl HttpProductApi {
    /// `base_url` is the API root, e.g. `http://localhost:8080/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    fn product_url(&self, id: DbId) -> String {
        format!("{}/products/{id}", self.base_url)
    }
}

/// Pass success responses through; turn anything else into
/// [`ClientError::Api`] carrying the server's message if present.
async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<MessageBody>()
        .await
        .ok()
        .map(|body| body.message);

    tracing::debug!(status = status.as_u16(), ?message, "API request failed");

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl ProductApi for HttpProductApi {
    async fn list(&self, query: &ListQuery) -> Result<ProductListPage, ClientError> {
        let page = query.page.to_string();
        let limit = query.limit.to_string();
        let response = self
            .http
            .get(self.products_url())
            .query(&[
                ("page", page.as_str()),
                ("limit", limit.as_str()),
                ("search", query.search.as_str()),
            ])
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    async fn get(&self, id: DbId) -> Result<Product, ClientError> {
        let response = self.http.get(self.product_url(id)).send().await?;
        Ok(check(response).await?.json().await?)
    }

    async fn create(&self, draft: &ProductDraft) -> Result<ProductCreated, ClientError> {
        let response = self
            .http
            .post(self.products_url())
            .json(draft)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    async fn update(&self, id: DbId, draft: &ProductDraft) -> Result<String, ClientError> {
        let response = self
            .http
            .put(self.product_url(id))
            .json(draft)
            .send()
            .await?;
        let body: MessageBody = check(response).await?.json().await?;
        Ok(body.message)
    }

    async fn delete(&self, id: DbId) -> Result<String, ClientError> {
        let response = self.http.delete(self.product_url(id)).send().await?;
        let body: MessageBody = check(response).await?.json().await?;
        Ok(body.message)
    }
}
