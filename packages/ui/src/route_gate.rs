//! Chooses which router the app mounts.
//!
//! Recomputed from the current [`AuthStatus`] on every render; nothing about
//! earlier statuses is remembered.

use dioxus::prelude::*;

use crate::auth::{use_auth, AuthStatus};

/// The two mutually exclusive route sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteSet {
    /// A single landing route that answers every path.
    Public,
    /// The full application.
    Authenticated,
}

impl RouteSet {
    pub fn for_status(status: &AuthStatus) -> Self {
        match status {
            AuthStatus::Authenticated(_) => RouteSet::Authenticated,
            AuthStatus::Loading | AuthStatus::Unauthenticated => RouteSet::Public,
        }
    }

    /// Two-flag form: loading wins over authentication.
    pub fn from_flags(is_loading: bool, is_authenticated: bool) -> Self {
        if !is_loading && is_authenticated {
            RouteSet::Authenticated
        } else {
            RouteSet::Public
        }
    }
}

/// Route set for the current auth status. Subscribes the caller to auth changes.
pub fn use_route_set() -> RouteSet {
    let status = use_auth();
    let set = RouteSet::for_status(&status.read());
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::UserInfo;

    #[test]
    fn test_for_status() {
        assert_eq!(RouteSet::for_status(&AuthStatus::Loading), RouteSet::Public);
        assert_eq!(RouteSet::for_status(&AuthStatus::Unauthenticated), RouteSet::Public);
        assert_eq!(
            RouteSet::for_status(&AuthStatus::Authenticated(UserInfo::default())),
            RouteSet::Authenticated
        );
    }

    #[test]
    fn test_from_flags() {
        assert_eq!(RouteSet::from_flags(true, false), RouteSet::Public);
        assert_eq!(RouteSet::from_flags(false, false), RouteSet::Public);
        assert_eq!(RouteSet::from_flags(false, true), RouteSet::Authenticated);
    }

    #[test]
    fn test_loading_overrides_authenticated_flag() {
        assert_eq!(RouteSet::from_flags(true, true), RouteSet::Public);
    }
}
