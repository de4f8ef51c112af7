//! # API crate — shared fullstack server functions for Snipnet
//!
//! Defines every Dioxus server function the web frontend calls, the models they
//! return, and the server-side plumbing behind them.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | `server` | Reading the signed-in user's id from the session |
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`error`] | `server` | [`error::ApiError`], converted to `ServerFnError` at the boundary |
//! | [`models`] | — | Users, snips, agents, networks, notifications, whispers, plus the pure helpers that rank and label them |
//! | [`settings`] | `server` | Layered configuration (defaults, `config.toml`, environment) |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated with
//! `#[get(...)]` or `#[post(...)]` and compiled twice: once with full server logic
//! (behind `#[cfg(feature = "server")]`) and once as a thin client stub.
//!
//! - **Authentication**: `get_current_user`, `logout`
//! - **Feed and agents**: `list_snips`, `list_agents`, `agent_performance`
//! - **Social**: `list_networks`, `list_notifications`, `list_whispers`
//!
//! All data functions require a signed-in session; the route gate in the UI never
//! calls them otherwise.

use dioxus::prelude::*;

pub mod auth;
pub mod db;
#[cfg(feature = "server")]
pub mod error;
pub mod models;
#[cfg(feature = "server")]
pub mod settings;

pub use models::{
    Agent, AgentPerformance, Network, Notification, Snip, UserInfo, Whisper,
};

#[cfg(feature = "server")]
fn server_error(e: impl std::fmt::Display) -> ServerFnError {
    ServerFnError::new(e.to_string())
}

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let Some(user_id) = auth::session_user_id(&session).await.map_err(server_error)? else {
        return Ok(None);
    };

    let pool = get_pool().await.map_err(server_error)?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(server_error)?;

    if user.is_none() {
        tracing::warn!(%user_id, "session refers to a missing user");
    }

    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session.flush().await.map_err(server_error)?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// All snips, newest first.
#[cfg(feature = "server")]
#[get("/api/snips", session: tower_sessions::Session)]
pub async fn list_snips() -> Result<Vec<Snip>, ServerFnError> {
    use crate::db::get_pool;

    auth::require_user_id(&session).await.map_err(server_error)?;
    let pool = get_pool().await.map_err(server_error)?;

    sqlx::query_as(
        "SELECT id, title, content, author_name, likes, comments, shares
         FROM snips ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await
    .map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/snips")]
pub async fn list_snips() -> Result<Vec<Snip>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// All agents, by name.
#[cfg(feature = "server")]
#[get("/api/agents", session: tower_sessions::Session)]
pub async fn list_agents() -> Result<Vec<Agent>, ServerFnError> {
    use crate::db::get_pool;

    auth::require_user_id(&session).await.map_err(server_error)?;
    let pool = get_pool().await.map_err(server_error)?;

    sqlx::query_as(
        "SELECT id, name, description, avatar, performance_score
         FROM agents ORDER BY name",
    )
    .fetch_all(pool)
    .await
    .map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/agents")]
pub async fn list_agents() -> Result<Vec<Agent>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Per-agent score and the number of whispers the current user exchanged with it.
#[cfg(feature = "server")]
#[get("/api/analytics/agent-performance", session: tower_sessions::Session)]
pub async fn agent_performance() -> Result<Vec<AgentPerformance>, ServerFnError> {
    use crate::db::get_pool;

    let user_id = auth::require_user_id(&session).await.map_err(server_error)?;
    let pool = get_pool().await.map_err(server_error)?;

    sqlx::query_as(
        "SELECT a.id AS agent_id, a.name, a.avatar,
                COALESCE(a.performance_score, 0) AS score,
                COUNT(w.id) AS interactions
         FROM agents a
         LEFT JOIN whispers w ON w.agent_id = a.id AND w.user_id = $1
         GROUP BY a.id
         ORDER BY score DESC, a.name",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/analytics/agent-performance")]
pub async fn agent_performance() -> Result<Vec<AgentPerformance>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// All networks with their member counts.
#[cfg(feature = "server")]
#[get("/api/networks", session: tower_sessions::Session)]
pub async fn list_networks() -> Result<Vec<Network>, ServerFnError> {
    use crate::db::get_pool;

    auth::require_user_id(&session).await.map_err(server_error)?;
    let pool = get_pool().await.map_err(server_error)?;

    sqlx::query_as(
        "SELECT n.id, n.name, n.description, COUNT(m.user_id) AS member_count
         FROM networks n
         LEFT JOIN network_members m ON m.network_id = n.id
         GROUP BY n.id
         ORDER BY n.name",
    )
    .fetch_all(pool)
    .await
    .map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/networks")]
pub async fn list_networks() -> Result<Vec<Network>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// The current user's notifications, newest first.
#[cfg(feature = "server")]
#[get("/api/notifications", session: tower_sessions::Session)]
pub async fn list_notifications() -> Result<Vec<Notification>, ServerFnError> {
    use crate::db::get_pool;

    let user_id = auth::require_user_id(&session).await.map_err(server_error)?;
    let pool = get_pool().await.map_err(server_error)?;

    sqlx::query_as(
        "SELECT id, message, read,
                to_char(created_at, 'YYYY-MM-DD HH24:MI') AS created_at
         FROM notifications
         WHERE user_id = $1
         ORDER BY notifications.created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/notifications")]
pub async fn list_notifications() -> Result<Vec<Notification>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// The current user's whispers with every agent, oldest first.
#[cfg(feature = "server")]
#[get("/api/whispers", session: tower_sessions::Session)]
pub async fn list_whispers() -> Result<Vec<Whisper>, ServerFnError> {
    use crate::db::get_pool;

    let user_id = auth::require_user_id(&session).await.map_err(server_error)?;
    let pool = get_pool().await.map_err(server_error)?;

    sqlx::query_as(
        "SELECT w.id, a.name AS agent_name, a.avatar AS agent_avatar,
                w.content, w.from_agent
         FROM whispers w
         JOIN agents a ON a.id = w.agent_id
         WHERE w.user_id = $1
         ORDER BY w.created_at",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/whispers")]
pub async fn list_whispers() -> Result<Vec<Whisper>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
