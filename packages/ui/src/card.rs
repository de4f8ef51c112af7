use dioxus::prelude::*;

/// A bordered panel with an optional heading.
#[component]
pub fn Card(
    title: Option<String>,
    subtitle: Option<String>,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    rsx! {
        section {
            class: "card {class}",
            if title.is_some() || subtitle.is_some() {
                header {
                    class: "card__header",
                    if let Some(title) = &title {
                        h3 { class: "card__title", "{title}" }
                    }
                    if let Some(subtitle) = &subtitle {
                        p { class: "card__subtitle", "{subtitle}" }
                    }
                }
            }
            div {
                class: "card__content",
                {children}
            }
        }
    }
}

/// Placeholder shown when a list has nothing in it (yet).
#[component]
pub fn EmptyState(title: String, message: String) -> Element {
    rsx! {
        div {
            class: "empty-state",
            h3 { "{title}" }
            p { "{message}" }
        }
    }
}
