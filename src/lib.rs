//! Catalog API: product and category CRUD over PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod repo;
pub mod response;
pub mod routes;
pub mod schema;
pub mod seed;
pub mod state;

pub use config::{AppConfig, ConfigError, UpdatePolicy};
pub use error::AppError;
pub use model::{Category, CategoryDraft, Product, ProductDraft};
pub use response::Message;
pub use routes::app;
pub use schema::{create_tables, drop_tables, ensure_database_exists};
pub use seed::seed;
pub use state::AppState;
