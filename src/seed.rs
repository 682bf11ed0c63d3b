//! Fixed sample rows for manual testing. Not idempotent: re-running on a
//! seeded database trips the category name constraint.

use crate::error::AppError;
use crate::model::{CategoryDraft, ProductDraft};
use crate::repo;
use sqlx::PgPool;

pub async fn seed(pool: &PgPool) -> Result<(), AppError> {
    let products = [
        ProductDraft {
            name: Some("Product 1".into()),
            description: Some("Product 1 description".into()),
            price: Some(12.99),
            stock: Some(15),
        },
        ProductDraft {
            name: Some("Product 2".into()),
            description: None,
            price: Some(149.99),
            stock: Some(25),
        },
    ];
    for draft in &products {
        repo::product::insert(pool, draft).await?;
    }

    let categories = [
        CategoryDraft {
            name: Some("Category 1".into()),
            description: Some("Category 1 description".into()),
        },
        CategoryDraft {
            name: Some("Category 2".into()),
            description: Some("Category 2 description".into()),
        },
        CategoryDraft {
            name: Some("Category 3".into()),
            description: Some("Category 3 description".into()),
        },
    ];
    for draft in &categories {
        repo::category::insert(pool, draft).await?;
    }
    Ok(())
}
