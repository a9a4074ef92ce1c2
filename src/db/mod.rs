use async_trait::async_trait;
use sqlx::error::ErrorKind;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::*;

#[cfg(test)]
pub mod memory;

/// Data-access seam for the handlers. Implementations own uniqueness of `productid`.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Every row, in whatever order the backing store yields them.
    async fn list_products(&self) -> AppResult<Vec<Product>>;

    /// Fails with [`AppError::Conflict`] when `productid` is already taken.
    async fn insert_product(&self, payload: &NewProduct) -> AppResult<()>;
}

// ── Postgres ─────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list_products(&self) -> AppResult<Vec<Product>> {
        fetch_all_products(&self.pool).await
    }

    async fn insert_product(&self, payload: &NewProduct) -> AppResult<()> {
        insert_product(&self.pool, payload).await
    }
}

pub async fn fetch_all_products(pool: &PgPool) -> AppResult<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT productid, name, description, purchased_from, cost, imageurl FROM products",
    )
    .fetch_all(pool)
    .await?;

    Ok(products)
}

pub async fn insert_product(pool: &PgPool, payload: &NewProduct) -> AppResult<()> {
    sqlx::query(
        r#"
        INSERT INTO products (productid, name, description, purchased_from, cost, imageurl)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(payload.productid)
    .bind(&payload.name)
    .bind(&payload.description)
    .bind(&payload.purchased_from)
    .bind(&payload.cost)
    .bind(payload.imageurl.as_deref())
    .execute(pool)
    .await
    .map_err(|e| classify_insert_error(e, payload.productid))?;

    Ok(())
}

/// Turns constraint violations into client errors; everything else stays a database error.
fn classify_insert_error(err: sqlx::Error, productid: i32) -> AppError {
    let kind = match &err {
        sqlx::Error::Database(db_err) => db_err.kind(),
        _ => return AppError::Database(err),
    };

    match kind {
        ErrorKind::UniqueViolation => {
            AppError::Conflict(format!("Product {} already exists", productid))
        }
        ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
            AppError::BadRequest(format!("Product {} violates a column constraint", productid))
        }
        _ => AppError::Database(err),
    }
}
