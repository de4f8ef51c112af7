use dioxus::prelude::*;

use crate::Route;

/// Known pages offered from the not-found page, dashboard first.
pub(crate) fn not_found_links() -> [(Route, &'static str); 4] {
    [
        (Route::Home {}, "Back to the dashboard"),
        (Route::Snips {}, "Snips"),
        (Route::Agents {}, "Agents"),
        (Route::Explore {}, "Explore"),
    ]
}

/// Shown for any path the signed-in router does not know.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "no route matched");

    rsx! {
        div {
            class: "not-found",
            h1 { "404" }
            p { "There is no page at {path}." }
            nav {
                class: "not-found__links",
                for (route, label) in not_found_links() {
                    Link { key: "{route}", to: route, "{label}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_back_to_root() {
        let links = not_found_links();
        assert_eq!(links[0].0, Route::Home {});
        assert_eq!(links[0].0.to_string(), "/");
    }

    #[test]
    fn test_links_only_to_known_pages() {
        for (route, _) in not_found_links() {
            assert!(!matches!(route, Route::NotFound { .. }));
        }
    }
}
