use crate::model::{Category, CategoryDraft};
use sqlx::PgPool;

pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>("SELECT id, name, description FROM categories ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn find(pool: &PgPool, id: i32) -> Result<Option<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>("SELECT id, name, description FROM categories WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// A duplicate name fails the UNIQUE constraint; the caller surfaces it as-is.
pub async fn insert(pool: &PgPool, draft: &CategoryDraft) -> Result<Category, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        "INSERT INTO categories (name, description) VALUES ($1, $2) \
         RETURNING id, name, description",
    )
    .bind(draft.name.as_deref())
    .bind(draft.description.as_deref())
    .fetch_one(pool)
    .await
}
