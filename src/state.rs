//! Shared application state, passed to every handler via axum `State`.

use crate::config::UpdatePolicy;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    /// How partial updates treat body fields; fixed at startup.
    pub update_policy: UpdatePolicy,
}
