//! Avatars for users and agents.

use api::UserInfo;
use dioxus::prelude::*;

/// Gradient used when an agent has no avatar or an unknown one.
pub const PLACEHOLDER_GRADIENT: &str = "linear-gradient(135deg, #8b5cf6 0%, #6366f1 100%)";

const GRADIENTS: &[(&str, &str)] = &[
    ("sunset", "linear-gradient(135deg, #f97316 0%, #ec4899 100%)"),
    ("ocean", "linear-gradient(135deg, #06b6d4 0%, #3b82f6 100%)"),
    ("forest", "linear-gradient(135deg, #22c55e 0%, #14b8a6 100%)"),
    ("ember", "linear-gradient(135deg, #ef4444 0%, #f59e0b 100%)"),
    ("midnight", "linear-gradient(135deg, #1e293b 0%, #6366f1 100%)"),
    ("violet", PLACEHOLDER_GRADIENT),
];

/// CSS background for a gradient identifier.
pub fn gradient_css(avatar: Option<&str>) -> &'static str {
    avatar
        .and_then(|id| GRADIENTS.iter().find(|(name, _)| *name == id.trim()))
        .map(|(_, css)| *css)
        .unwrap_or(PLACEHOLDER_GRADIENT)
}

/// Single uppercase letter for an agent name, `"A"` when the name is blank.
pub fn agent_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .map(String::from)
        .unwrap_or_else(|| "A".to_string())
}

/// The signed-in user's picture, or their initials when there is none.
#[component]
pub fn UserAvatar(user: Option<UserInfo>, #[props(default = 40)] size: u32) -> Element {
    let user = user.unwrap_or_default();
    let style = format!("width: {size}px; height: {size}px;");

    match user.profile_image_url.as_deref().filter(|url| !url.is_empty()) {
        Some(url) => rsx! {
            img {
                class: "avatar avatar--image",
                style: "{style}",
                src: "{url}",
                alt: "{user.display_name()}",
            }
        },
        None => rsx! {
            span {
                class: "avatar avatar--initials",
                style: "{style}",
                title: "{user.display_name()}",
                "{user.initials()}"
            }
        },
    }
}

#[component]
pub fn AgentAvatar(name: String, avatar: Option<String>, #[props(default = 40)] size: u32) -> Element {
    let background = gradient_css(avatar.as_deref());

    rsx! {
        span {
            class: "avatar avatar--agent",
            style: "width: {size}px; height: {size}px; background: {background};",
            title: "{name}",
            "{agent_initial(&name)}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_gradient() {
        assert_eq!(
            gradient_css(Some("ocean")),
            "linear-gradient(135deg, #06b6d4 0%, #3b82f6 100%)"
        );
    }

    #[test]
    fn test_missing_or_unknown_gradient_uses_placeholder() {
        assert_eq!(gradient_css(None), PLACEHOLDER_GRADIENT);
        assert_eq!(gradient_css(Some("plaid")), PLACEHOLDER_GRADIENT);
        assert_eq!(gradient_css(Some("")), PLACEHOLDER_GRADIENT);
    }

    #[test]
    fn test_agent_initial() {
        assert_eq!(agent_initial("nova"), "N");
        assert_eq!(agent_initial("   "), "A");
    }

    #[test]
    fn test_agent_initial_is_one_char() {
        assert_eq!(agent_initial("ßigma"), "S");
    }
}
