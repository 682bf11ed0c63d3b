//! Explicit schema DDL for the catalog tables, plus database bootstrap.
//!
//! The table definitions live here as plain SQL, separate from the
//! in-memory record types in `model`.

use crate::config::ConfigError;
use crate::error::AppError;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

const CREATE_PRODUCTS: &str = "\
CREATE TABLE IF NOT EXISTS products (
    id SERIAL PRIMARY KEY,
    name VARCHAR(100) NOT NULL,
    description VARCHAR(100),
    price DOUBLE PRECISION,
    stock INTEGER
)";

const CREATE_CATEGORIES: &str = "\
CREATE TABLE IF NOT EXISTS categories (
    id SERIAL PRIMARY KEY,
    name VARCHAR(100) NOT NULL UNIQUE,
    description VARCHAR(100)
)";

/// Idempotent: both tables are created with IF NOT EXISTS.
pub async fn create_tables(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(CREATE_PRODUCTS).execute(pool).await?;
    sqlx::query(CREATE_CATEGORIES).execute(pool).await?;
    Ok(())
}

pub async fn drop_tables(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query("DROP TABLE IF EXISTS products").execute(pool).await?;
    sqlx::query("DROP TABLE IF EXISTS categories").execute(pool).await?;
    Ok(())
}

/// Creates the database named in `database_url` if it does not exist,
/// by connecting to the server's default `postgres` database. Call
/// before opening the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = split_database_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts =
        sqlx::postgres::PgConnectOptions::from_str(&admin_url).map_err(|_| ConfigError::Invalid {
            var: "DATABASE_URL",
            value: database_url.to_string(),
        })?;
    let mut conn = opts.connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Splits a connection URL into (url pointing at `postgres`, database name).
fn split_database_url(url: &str) -> Result<(String, String), ConfigError> {
    let slash = url.rfind('/').ok_or_else(|| ConfigError::Invalid {
        var: "DATABASE_URL",
        value: url.to_string(),
    })?;
    let db_name = url[slash + 1..].split('?').next().unwrap_or("").trim();
    let admin_url = format!("{}postgres", &url[..slash + 1]);
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_extracts_db_name_and_admin_url() {
        let (admin, name) = split_database_url("postgres://user:pw@localhost:5432/catalog").unwrap();
        assert_eq!(admin, "postgres://user:pw@localhost:5432/postgres");
        assert_eq!(name, "catalog");
    }

    #[test]
    fn split_ignores_query_params() {
        let (_, name) = split_database_url("postgres://localhost/catalog?sslmode=disable").unwrap();
        assert_eq!(name, "catalog");
    }

    #[test]
    fn quote_ident_escapes_embedded_quotes() {
        assert_eq!(quote_ident("odd\"name"), "\"odd\"\"name\"");
    }
}
