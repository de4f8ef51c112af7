//! Session-based authentication.
//!
//! Login itself happens through an external provider mounted at `/api/login`,
//! which writes the user's id into the session. This module only reads it back.

#[cfg(feature = "server")]
mod session;

#[cfg(feature = "server")]
pub use session::{require_user_id, session_user_id, SESSION_USER_ID_KEY};
