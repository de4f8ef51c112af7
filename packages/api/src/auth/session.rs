//! Session lookups for the signed-in user.

use tower_sessions::Session;
use uuid::Uuid;

use crate::error::ApiError;

/// Key under which the external login flow stores the user's UUID.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Read the user id from the session, if any.
pub async fn session_user_id(session: &Session) -> Result<Option<Uuid>, ApiError> {
    let user_id: Option<String> = session.get(SESSION_USER_ID_KEY).await?;

    match user_id {
        Some(id) => Ok(Some(Uuid::parse_str(&id)?)),
        None => Ok(None),
    }
}

/// Like [`session_user_id`], but an anonymous session is an error.
pub async fn require_user_id(session: &Session) -> Result<Uuid, ApiError> {
    session_user_id(session)
        .await?
        .ok_or(ApiError::NotAuthenticated)
}
