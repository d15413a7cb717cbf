pub mod product;

pub use product::{Product, ProductId, ProductInput, ProductUpdate};
