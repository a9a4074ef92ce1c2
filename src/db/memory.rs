use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ProductStore;
use crate::error::{AppError, AppResult};
use crate::models::{NewProduct, Product};

/// In-process stand-in for the `products` table.
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    rows: RwLock<HashMap<i32, Product>>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn list_products(&self) -> AppResult<Vec<Product>> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn insert_product(&self, payload: &NewProduct) -> AppResult<()> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(&payload.productid) {
            return Err(AppError::Conflict(format!(
                "Product {} already exists",
                payload.productid
            )));
        }
        rows.insert(payload.productid, payload.to_product());
        Ok(())
    }
}

/// Store whose backing database is never reachable.
#[derive(Debug, Default)]
pub struct UnavailableStore;

#[async_trait]
impl ProductStore for UnavailableStore {
    async fn list_products(&self) -> AppResult<Vec<Product>> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn insert_product(&self, _payload: &NewProduct) -> AppResult<()> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(productid: i32, name: &str) -> NewProduct {
        NewProduct {
            productid,
            name: name.to_string(),
            description: format!("{} description", name),
            cost: "1.00".to_string(),
            purchased_from: "Acme".to_string(),
            imageurl: None,
        }
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = MemoryProductStore::new();
        assert!(store.list_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_id_is_rejected_without_second_row() {
        let store = MemoryProductStore::new();
        store.insert_product(&payload(1, "Widget")).await.unwrap();

        let err = store.insert_product(&payload(1, "Gadget")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(store.len().await, 1);

        let names: Vec<String> = store
            .list_products()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Widget".to_string()]);
    }
}
