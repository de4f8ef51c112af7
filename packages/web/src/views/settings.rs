use dioxus::prelude::*;

use ui::{use_auth, Card, LogoutButton, PageHeader, UserAvatar};

#[component]
pub fn Settings() -> Element {
    let auth = use_auth();
    let user = auth.read().user().cloned();
    let profile = user.clone().unwrap_or_default();
    let email = profile.email.clone().unwrap_or_else(|| "No email on file".to_string());

    rsx! {
        PageHeader { title: "Settings" }

        Card {
            title: Some("Profile".to_string()),
            subtitle: Some("Managed by your sign-in provider.".to_string()),
            div {
                class: "profile",
                UserAvatar { user: user, size: 56 }
                div {
                    p { class: "profile__name", "{profile.display_name()}" }
                    p { class: "profile__email", "{email}" }
                }
            }
        }

        Card {
            title: Some("Session".to_string()),
            LogoutButton {}
        }
    }
}
