use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body accepted by `POST /products/add/`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductDocument {
    pub handle: String,
    pub weight: f64,
    pub price: f64,
}

/// Body accepted by `POST /storage/{handle}/add/`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct StorageDocument {
    pub location: String,
    pub qty: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InventoryEntry {
    pub handle: String,
    pub weight: f64,
    pub price: f64,
    /// `[location, qty]` pairs, one per storage row
    #[schema(value_type = Vec<Object>)]
    pub inventory: Vec<(String, i32)>,
}
