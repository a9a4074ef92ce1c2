use serde::{Deserialize, Serialize};

/// Row of the `products` table. `productid` is supplied by the caller, never generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Product {
    pub productid: i32,
    pub name: String,
    pub description: String,
    pub purchased_from: String,
    /// Stored as text, not a numeric column.
    pub cost: String,
    pub imageurl: Option<String>,
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Body of `POST /products`. Every key except `imageurl` must be present and non-null.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub productid: i32,
    pub name: String,
    pub description: String,
    pub cost: String,
    pub purchased_from: String,
    #[serde(default)]
    pub imageurl: Option<String>,
}

impl NewProduct {
    pub fn to_product(&self) -> Product {
        Product {
            productid: self.productid,
            name: self.name.clone(),
            description: self.description.clone(),
            purchased_from: self.purchased_from.clone(),
            cost: self.cost.clone(),
            imageurl: self.imageurl.clone(),
        }
    }
}
