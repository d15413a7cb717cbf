use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::{ProductRepository, RepositoryError};
use crate::models::product::{Product, ProductId, ProductInput};

/// Volatile product store. Everything is lost when the process exits.
#[derive(Debug)]
pub struct InMemoryProductRepository {
    inner: RwLock<Table>,
}

#[derive(Debug)]
struct Table {
    next_id: ProductId,
    rows: BTreeMap<ProductId, Product>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Table {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

#[cfg(test)]
impl InMemoryProductRepository {
    fn starting_at(next_id: ProductId) -> Self {
        Self {
            inner: RwLock::new(Table {
                next_id,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> Vec<Product> {
        self.inner.read().await.rows.values().cloned().collect()
    }

    async fn get(&self, id: ProductId) -> Result<Product, RepositoryError> {
        self.inner
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn create(&self, input: ProductInput) -> Result<Product, RepositoryError> {
        let mut table = self.inner.write().await;
        // Ids are handed out under the write lock and never reused.
        let id = table.next_id;
        table.next_id = id.checked_add(1).ok_or(RepositoryError::IdsExhausted)?;

        let product = Product::from_input(id, input);
        table.rows.insert(id, product.clone());
        Ok(product)
    }

    async fn replace(
        &self,
        id: ProductId,
        input: ProductInput,
    ) -> Result<Product, RepositoryError> {
        let mut table = self.inner.write().await;
        let product = table
            .rows
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound(id))?;
        product.apply(input);
        Ok(product.clone())
    }

    async fn delete(&self, id: ProductId) -> Result<Product, RepositoryError> {
        self.inner
            .write()
            .await
            .rows
            .remove(&id)
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn count(&self) -> usize {
        self.inner.read().await.rows.len()
    }
}
