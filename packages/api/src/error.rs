//! Server-side error type.
//!
//! Server functions convert these into `ServerFnError` at the boundary, so the
//! client only ever sees the rendered message.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid user id in session: {0}")]
    InvalidUserId(#[from] uuid::Error),
}
