#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use catalog_client::model::{ListQuery, Product, ProductCreated, ProductDraft, ProductListPage};
use catalog_client::{ClientError, ProductApi};
use catalog_core::types::DbId;
use rust_decimal::Decimal;

/// Operations a [`FakeApi`] can be told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    List,
    Get,
    Create,
    Update,
    Delete,
}

#[derive(Default)]
struct Inner {
    products: Vec<Product>,
    next_id: DbId,
    list_calls: Vec<ListQuery>,
    failures: HashMap<Op, (u16, Option<String>)>,
    search_delays: HashMap<String, Duration>,
}

/// In-memory [`ProductApi`] that records list requests.
#[derive(Default)]
pub struct FakeApi {
    inner: Mutex<Inner>,
}

impl FakeApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Fake seeded with `count` products named "Product 1".."Product N".
    pub fn seeded(count: usize) -> Arc<Self> {
        let api = Self::new();
        for n in 1..=count {
            api.insert(&format!("Product {n}"), Decimal::new(999, 2), 5);
        }
        api
    }

    pub fn insert(&self, name: &str, price: Decimal, stock: i32) -> DbId {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.products.push(Product {
            id,
            name: name.to_string(),
            description: None,
            price,
            stock,
        });
        id
    }

    pub fn product(&self, id: DbId) -> Option<Product> {
        self.inner
            .lock()
            .unwrap()
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    pub fn product_count(&self) -> usize {
        self.inner.lock().unwrap().products.len()
    }

    pub fn list_calls(&self) -> Vec<ListQuery> {
        self.inner.lock().unwrap().list_calls.clone()
    }

    pub fn fail(&self, op: Op, status: u16, message: Option<&str>) {
        self.inner
            .lock()
            .unwrap()
            .failures
            .insert(op, (status, message.map(str::to_string)));
    }

    /// Delay list responses for `search` by `delay`.
    pub fn delay_search(&self, search: &str, delay: Duration) {
        self.inner
            .lock()
            .unwrap()
            .search_delays
            .insert(search.to_string(), delay);
    }

    fn failure(&self, op: Op) -> Result<(), ClientError> {
        match self.inner.lock().unwrap().failures.get(&op) {
            Some((status, message)) => Err(ClientError::Api {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    fn not_found(id: DbId) -> ClientError {
        ClientError::Api {
            status: 404,
            message: Some(format!("Product with id {id} not found")),
        }
    }
}

#[async_trait]
impl ProductApi for FakeApi {
    async fn list(&self, query: &ListQuery) -> Result<ProductListPage, ClientError> {
        let delay = {
            let mut inner = self.inner.lock().unwrap();
            inner.list_calls.push(query.clone());
            inner.search_delays.get(&query.search).copied()
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.failure(Op::List)?;

        let inner = self.inner.lock().unwrap();
        let needle = query.search.to_lowercase();
        let matching: Vec<Product> = inner
            .products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        let total = matching.len() as i64;
        let offset = ((query.page - 1) * query.limit) as usize;

        Ok(ProductListPage {
            total_products: total,
            total_pages: (total + query.limit - 1) / query.limit,
            current_page: query.page,
            products: matching
                .into_iter()
                .skip(offset)
                .take(query.limit as usize)
                .collect(),
        })
    }

    async fn get(&self, id: DbId) -> Result<Product, ClientError> {
        self.failure(Op::Get)?;
        self.product(id).ok_or_else(|| Self::not_found(id))
    }

    async fn create(&self, draft: &ProductDraft) -> Result<ProductCreated, ClientError> {
        self.failure(Op::Create)?;
        let id = self.insert(&draft.name, draft.price, draft.stock);
        let mut inner = self.inner.lock().unwrap();
        if let Some(product) = inner.products.iter_mut().find(|p| p.id == id) {
            product.description = draft.description.clone();
        }
        Ok(ProductCreated {
            message: "Product created successfully.".to_string(),
            product_id: id,
        })
    }

    async fn update(&self, id: DbId, draft: &ProductDraft) -> Result<String, ClientError> {
        self.failure(Op::Update)?;
        let mut inner = self.inner.lock().unwrap();
        let product = inner
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        product.name = draft.name.clone();
        product.description = draft.description.clone();
        product.price = draft.price;
        product.stock = draft.stock;
        Ok("Product updated successfully.".to_string())
    }

    async fn delete(&self, id: DbId) -> Result<String, ClientError> {
        self.failure(Op::Delete)?;
        let mut inner = self.inner.lock().unwrap();
        let before = inner.products.len();
        inner.products.retain(|p| p.id != id);
        if inner.products.len() == before {
            return Err(Self::not_found(id));
        }
        Ok("Product deleted successfully.".to_string())
    }
}
