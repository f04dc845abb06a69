//! Product catalog entity.

use serde::{Deserialize, Serialize};

/// A product as served by `GET /products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub category: String,
    pub cost: u64,
    pub rating: f32,
    /// Image URL rendered by the product card.
    pub image: String,
}
