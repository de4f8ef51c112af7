//! This crate contains all shared UI for the workspace: the auth context, the
//! route gate, the data hooks and the visual building blocks the pages are
//! composed from.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const UI_CSS: Asset = asset!("/assets/ui.css");

mod auth;
pub use auth::{use_auth, AuthProvider, AuthStatus, LoginLink, LogoutButton, LOGIN_PATH};

mod route_gate;
pub use route_gate::{use_route_set, RouteSet};

pub mod query;
pub use query::{
    use_agent_performance, use_agents, use_networks, use_notifications, use_query, use_snips,
    use_whispers, QueryKey,
};

mod avatar;
pub use avatar::{agent_initial, gradient_css, AgentAvatar, UserAvatar, PLACEHOLDER_GRADIENT};

mod button;
pub use button::{Button, ButtonVariant};

mod card;
pub use card::{Card, EmptyState};

mod page_header;
pub use page_header::PageHeader;

mod typing_indicator;
pub use typing_indicator::TypingIndicator;

mod snip_card;
pub use snip_card::SnipCard;

mod agent_card;
pub use agent_card::AgentCard;
