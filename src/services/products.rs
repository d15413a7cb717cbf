use std::sync::Arc;

use tracing::{info, instrument};
use validator::Validate;

use crate::errors::ServiceError;
use crate::models::product::{Product, ProductId, ProductInput, ProductUpdate};
use crate::repositories::ProductRepository;

/// Product operations exposed to the HTTP layer.
#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_products(&self) -> Vec<Product> {
        self.repository.list().await
    }

    pub async fn get_product(&self, id: ProductId) -> Result<Product, ServiceError> {
        Ok(self.repository.get(id).await?)
    }

    #[instrument(skip(self, input))]
    pub async fn create_product(&self, input: ProductInput) -> Result<Product, ServiceError> {
        input.validate()?;
        let product = self.repository.create(input).await?;
        info!(product_id = product.id, name = %product.name, "product created");
        Ok(product)
    }

    /// Replaces a product in full. The body id must equal the route id.
    #[instrument(skip(self, update))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ServiceError> {
        if update.id != id {
            return Err(ServiceError::BadRequest(format!(
                "route id {} does not match body id {}",
                id, update.id
            )));
        }
        update.validate()?;

        let product = self.repository.replace(id, update.into()).await?;
        info!(product_id = id, "product updated");
        Ok(product)
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ServiceError> {
        self.repository.delete(id).await?;
        info!(product_id = id, "product deleted");
        Ok(())
    }

    pub async fn product_count(&self) -> usize {
        self.repository.count().await
    }
}
