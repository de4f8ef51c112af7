use dioxus::prelude::*;

/// Title row at the top of every page. Children render on the right.
#[component]
pub fn PageHeader(title: String, subtitle: Option<String>, children: Element) -> Element {
    rsx! {
        div {
            class: "page-header",
            div {
                h1 { class: "page-header__title", "{title}" }
                if let Some(subtitle) = &subtitle {
                    p { class: "page-header__subtitle", "{subtitle}" }
                }
            }
            div {
                class: "page-header__actions",
                {children}
            }
        }
    }
}
