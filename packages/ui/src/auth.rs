//! Authentication context and hooks for the UI.

use api::UserInfo;
use dioxus::prelude::*;

/// Where the external login provider is mounted.
pub const LOGIN_PATH: &str = "/api/login";

/// Authentication status for the application.
///
/// Starts as `Loading` until the first `/api/auth/me` lookup resolves.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AuthStatus {
    #[default]
    Loading,
    Unauthenticated,
    Authenticated(UserInfo),
}

impl AuthStatus {
    /// Fold the state of a current-user lookup into a status.
    ///
    /// `None` means the lookup is still in flight. A failed lookup counts as
    /// signed out.
    pub fn from_lookup<E>(lookup: Option<&Result<Option<UserInfo>, E>>) -> Self {
        match lookup {
            None => AuthStatus::Loading,
            Some(Ok(Some(user))) => AuthStatus::Authenticated(user.clone()),
            Some(Ok(None)) | Some(Err(_)) => AuthStatus::Unauthenticated,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AuthStatus::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthStatus::Authenticated(_))
    }

    pub fn user(&self) -> Option<&UserInfo> {
        match self {
            AuthStatus::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Get the current authentication status.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthStatus> {
    use_context::<Signal<AuthStatus>>()
}

/// Provider component that manages authentication status.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut status = use_signal(AuthStatus::default);

    // Fetch the current user on mount
    let _ = use_resource(move || async move {
        let lookup = api::get_current_user().await;
        if let Err(e) = &lookup {
            tracing::warn!("Failed to load current user: {}", e);
        }
        status.set(AuthStatus::from_lookup(Some(&lookup)));
    });

    use_context_provider(|| status);

    rsx! {
        {children}
    }
}

/// Link to the external login flow.
#[component]
pub fn LoginLink(
    #[props(default = "Log in".to_string())] label: String,
    #[props(default = "button button--primary".to_string())] class: String,
) -> Element {
    rsx! {
        a {
            class: "{class}",
            href: LOGIN_PATH,
            "{label}"
        }
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "button button--secondary".to_string())] class: String,
) -> Element {
    let mut status = use_auth();

    let onclick = move |_| async move {
        match api::logout().await {
            Ok(()) => status.set(AuthStatus::Unauthenticated),
            Err(e) => tracing::error!("Failed to log out: {}", e),
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> UserInfo {
        UserInfo {
            id: "1".to_string(),
            first_name: Some("Ada".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_pending_lookup_is_loading() {
        let status = AuthStatus::from_lookup::<String>(None);
        assert_eq!(status, AuthStatus::Loading);
        assert!(status.is_loading());
        assert!(status.user().is_none());
    }

    #[test]
    fn test_resolved_user_is_authenticated() {
        let lookup: Result<Option<UserInfo>, String> = Ok(Some(ada()));
        let status = AuthStatus::from_lookup(Some(&lookup));
        assert!(status.is_authenticated());
        assert_eq!(status.user(), Some(&ada()));
    }

    #[test]
    fn test_anonymous_and_failed_lookups_are_unauthenticated() {
        let anonymous: Result<Option<UserInfo>, String> = Ok(None);
        let failed: Result<Option<UserInfo>, String> = Err("offline".to_string());
        assert_eq!(AuthStatus::from_lookup(Some(&anonymous)), AuthStatus::Unauthenticated);
        assert_eq!(AuthStatus::from_lookup(Some(&failed)), AuthStatus::Unauthenticated);
    }
}
