use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Storage-assigned product identifier.
pub type ProductId = i32;

/// A stored product record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"id": 1, "name": "Carrot", "price": 1.5, "quantity": 10}))]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub quantity: i32,
}

impl Product {
    pub fn from_input(id: ProductId, input: ProductInput) -> Self {
        Self {
            id,
            name: input.name,
            price: input.price,
            quantity: input.quantity,
        }
    }

    /// Overwrites every mutable field. The id never changes.
    pub fn apply(&mut self, input: ProductInput) {
        self.name = input.name;
        self.price = input.price;
        self.quantity = input.quantity;
    }
}

/// Body of a create request. Any `id` sent by the client is ignored.
#[derive(Clone, Debug, PartialEq, Deserialize, Validate, ToSchema)]
#[schema(example = json!({"name": "Carrot", "price": 1.5, "quantity": 10}))]
pub struct ProductInput {
    #[serde(default)]
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    #[validate(custom = "validate_price")]
    pub price: Decimal,
    #[validate(range(min = 0))]
    pub quantity: i32,
}

/// Body of a replace request. Carries the id so it can be checked against the route.
#[derive(Clone, Debug, PartialEq, Deserialize, Validate, ToSchema)]
#[schema(example = json!({"id": 1, "name": "Carrot", "price": 1.75, "quantity": 8}))]
pub struct ProductUpdate {
    #[serde(default)]
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    #[validate(custom = "validate_price")]
    pub price: Decimal,
    #[validate(range(min = 0))]
    pub quantity: i32,
}

impl From<ProductUpdate> for ProductInput {
    fn from(update: ProductUpdate) -> Self {
        Self {
            name: update.name,
            price: update.price,
            quantity: update.quantity,
        }
    }
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price < Decimal::ZERO {
        let mut err = ValidationError::new("price");
        err.message = Some("price must not be negative".into());
        return Err(err);
    }
    Ok(())
}
