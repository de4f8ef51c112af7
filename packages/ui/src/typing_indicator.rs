use dioxus::prelude::*;

/// Three bouncing dots with an "is typing" label. The animation is pure CSS.
#[component]
pub fn TypingIndicator(#[props(default = "Agent".to_string())] name: String) -> Element {
    rsx! {
        div {
            class: "typing-indicator",
            span { class: "typing-indicator__dot" }
            span { class: "typing-indicator__dot" }
            span { class: "typing-indicator__dot" }
            span { class: "typing-indicator__label", "{name} is typing…" }
        }
    }
}
