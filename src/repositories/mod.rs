use async_trait::async_trait;
use thiserror::Error;

use crate::models::product::{Product, ProductId, ProductInput};

pub mod product_repository;

pub use product_repository::InMemoryProductRepository;

/// Storage-level failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("product {0} does not exist")]
    NotFound(ProductId),

    #[error("no product ids left to assign")]
    IdsExhausted,
}

/// Keyed product storage.
///
/// Handlers never see a concrete store; they receive an `Arc<dyn ProductRepository>`
/// through application state.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products in ascending id order.
    async fn list(&self) -> Vec<Product>;

    async fn get(&self, id: ProductId) -> Result<Product, RepositoryError>;

    /// Stores a new product under a freshly assigned id.
    async fn create(&self, input: ProductInput) -> Result<Product, RepositoryError>;

    /// Replaces name, price and quantity of an existing product.
    async fn replace(&self, id: ProductId, input: ProductInput)
        -> Result<Product, RepositoryError>;

    /// Removes a product and returns the removed record.
    async fn delete(&self, id: ProductId) -> Result<Product, RepositoryError>;

    async fn count(&self) -> usize;
}
