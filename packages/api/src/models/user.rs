//! # User model for authenticated users
//!
//! Two representations of a Snipnet user:
//!
//! ## [`User`] (server only)
//!
//! The complete row from the `users` table, written by the external login flow.
//! It derives [`sqlx::FromRow`] so it can be loaded directly from queries.
//! [`User::to_info`] projects it into a [`UserInfo`].
//!
//! ## [`UserInfo`]
//!
//! A client-safe subset that can cross the server/client boundary via Dioxus server
//! functions. The `Uuid` becomes a `String` so it works in WASM.
//!
//! [`UserInfo::display_name`] and [`UserInfo::initials`] derive the labels shown in
//! the sidebar, the dashboard greeting and the avatar fallback. Both walk the same
//! chain: first + last name, then first name, then email, then a placeholder.
//! Only `None` and `""` count as missing; present fields are used exactly as stored.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Label shown when a user has neither a name nor an email.
pub const PLACEHOLDER_NAME: &str = "User";
/// Initials shown when a user has neither a name nor an email.
pub const PLACEHOLDER_INITIALS: &str = "U";

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            profile_image_url: self.profile_image_url.clone(),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
}

impl UserInfo {
    /// Full label for the user, e.g. `"Ada Lovelace"`, `"Ada"`, `"ada@example.com"`
    /// or [`PLACEHOLDER_NAME`].
    pub fn display_name(&self) -> String {
        match (self.first(), self.last(), self.email()) {
            (Some(first), Some(last), _) => format!("{first} {last}"),
            (Some(first), None, _) => first.to_string(),
            (None, _, Some(email)) => email.to_string(),
            (None, _, None) => PLACEHOLDER_NAME.to_string(),
        }
    }

    /// Avatar initials: one uppercase character per name part, so at most two.
    pub fn initials(&self) -> String {
        match (self.first(), self.last(), self.email()) {
            (Some(first), Some(last), _) => {
                let mut initials = leading_upper(first);
                initials.push_str(&leading_upper(last));
                initials
            }
            (Some(first), None, _) => leading_upper(first),
            (None, _, Some(email)) => leading_upper(email),
            (None, _, None) => PLACEHOLDER_INITIALS.to_string(),
        }
    }

    fn first(&self) -> Option<&str> {
        present(self.first_name.as_deref())
    }

    fn last(&self) -> Option<&str> {
        present(self.last_name.as_deref())
    }

    fn email(&self) -> Option<&str> {
        present(self.email.as_deref())
    }
}

fn present(field: Option<&str>) -> Option<&str> {
    field.filter(|s| !s.is_empty())
}

/// First letter of `s`, skipping leading whitespace, as exactly one uppercase char.
fn leading_upper(s: &str) -> String {
    s.chars()
        .find(|c| !c.is_whitespace())
        .or_else(|| s.chars().next())
        .and_then(|c| c.to_uppercase().next())
        .map(String::from)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: Option<&str>, last: Option<&str>, email: Option<&str>) -> UserInfo {
        UserInfo {
            id: "u1".to_string(),
            email: email.map(String::from),
            first_name: first.map(String::from),
            last_name: last.map(String::from),
            profile_image_url: None,
        }
    }

    #[test]
    fn test_first_and_last_name() {
        let u = user(Some("ada"), Some("lovelace"), Some("ada@example.com"));
        assert_eq!(u.initials(), "AL");
        assert_eq!(u.display_name(), "ada lovelace");
    }

    #[test]
    fn test_first_name_only() {
        let u = user(Some("grace"), None, Some("grace@example.com"));
        assert_eq!(u.initials(), "G");
        assert_eq!(u.display_name(), "grace");
    }

    #[test]
    fn test_email_only() {
        let u = user(None, None, Some("linus@example.com"));
        assert_eq!(u.initials(), "L");
        assert_eq!(u.display_name(), "linus@example.com");
    }

    #[test]
    fn test_last_name_without_first_falls_back_to_email() {
        let u = user(None, Some("hopper"), Some("gh@example.com"));
        assert_eq!(u.initials(), "G");
        assert_eq!(u.display_name(), "gh@example.com");
    }

    #[test]
    fn test_placeholder() {
        let u = UserInfo::default();
        assert_eq!(u.initials(), "U");
        assert_eq!(u.display_name(), "User");
    }

    #[test]
    fn test_empty_fields_are_missing() {
        let u = user(Some(""), Some(""), Some(""));
        assert_eq!(u.initials(), PLACEHOLDER_INITIALS);
        assert_eq!(u.display_name(), PLACEHOLDER_NAME);
    }

    #[test]
    fn test_fields_are_used_as_stored() {
        let u = user(Some(" Ada"), Some("Lovelace "), None);
        assert_eq!(u.display_name(), " Ada Lovelace ");
        assert_eq!(u.initials(), "AL");

        let spaces = user(Some("  "), None, Some("x@example.com"));
        assert_eq!(spaces.display_name(), "  ");
        assert_eq!(spaces.initials(), " ");
    }

    #[test]
    fn test_initials_stay_one_char_per_part() {
        let u = user(Some("ßam"), Some("ßo"), None);
        assert_eq!(u.initials(), "SS");
        assert_eq!(u.initials().chars().count(), 2);

        let email_only = user(None, None, Some("ßam@example.com"));
        assert_eq!(email_only.initials().chars().count(), 1);
    }

    #[test]
    fn test_non_ascii_initials() {
        let u = user(Some("émile"), Some("zola"), None);
        assert_eq!(u.initials(), "ÉZ");
        assert_eq!(u.display_name(), "émile zola");
    }
}
