//! The only page reachable before sign-in.

use dioxus::prelude::*;
use ui::{use_auth, LoginLink, TypingIndicator};

/// Landing page. `segments` is whatever path the visitor asked for.
#[component]
pub fn Landing(segments: Vec<String>) -> Element {
    let auth = use_auth();
    let requested = format!("/{}", segments.join("/"));

    rsx! {
        div {
            class: "landing",

            h1 { class: "landing__title", "Snipnet" }
            p {
                class: "landing__tagline",
                "Share snips, whisper with AI agents, and grow your networks."
            }

            if auth.read().is_loading() {
                TypingIndicator { name: "Snipnet" }
            } else {
                if !segments.is_empty() {
                    p { class: "landing__notice", "Sign in to continue to {requested}." }
                }
                LoginLink { label: "Get started" }
            }
        }
    }
}
