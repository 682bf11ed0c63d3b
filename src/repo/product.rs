use crate::model::{Product, ProductDraft};
use sqlx::PgPool;

pub async fn list(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        "SELECT id, name, description, price, stock FROM products ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

pub async fn find(pool: &PgPool, id: i32) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        "SELECT id, name, description, price, stock FROM products WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// A draft without a name inserts NULL and fails the NOT NULL constraint.
pub async fn insert(pool: &PgPool, draft: &ProductDraft) -> Result<Product, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        "INSERT INTO products (name, description, price, stock) \
         VALUES ($1, $2, $3, $4) \
         RETURNING id, name, description, price, stock",
    )
    .bind(draft.name.as_deref())
    .bind(draft.description.as_deref())
    .bind(draft.price)
    .bind(draft.stock)
    .fetch_one(pool)
    .await
}

/// Writes every column of an already-merged record.
pub async fn update(pool: &PgPool, product: &Product) -> Result<Product, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        "UPDATE products SET name = $1, description = $2, price = $3, stock = $4 \
         WHERE id = $5 \
         RETURNING id, name, description, price, stock",
    )
    .bind(&product.name)
    .bind(product.description.as_deref())
    .bind(product.price)
    .bind(product.stock)
    .bind(product.id)
    .fetch_one(pool)
    .await
}

/// Returns the deleted row, or None when the id has no match.
pub async fn delete(pool: &PgPool, id: i32) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        "DELETE FROM products WHERE id = $1 \
         RETURNING id, name, description, price, stock",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
