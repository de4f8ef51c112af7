//! Dashboard: greeting, headline numbers, top snips and top agents.

use dioxus::prelude::*;

use api::models::{by_performance, top_snips, unread_count};
use ui::{
    use_agents, use_auth, use_notifications, use_snips, AgentCard, Card, EmptyState, PageHeader,
    SnipCard,
};

const TOP_AGENT_COUNT: usize = 3;

#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let snips = use_snips();
    let agents = use_agents();
    let notifications = use_notifications();

    let name = auth.read().user().cloned().unwrap_or_default().display_name();
    let top = top_snips(&snips);
    let leaders: Vec<_> = by_performance(&agents).into_iter().take(TOP_AGENT_COUNT).collect();
    let unread = unread_count(&notifications);

    rsx! {
        PageHeader {
            title: format!("Welcome back, {name}"),
            subtitle: Some("Here's what's happening across your networks.".to_string()),
        }

        div {
            class: "stat-grid",
            Card { title: Some("Snips".to_string()), p { class: "stat", "{snips.len()}" } }
            Card { title: Some("Agents".to_string()), p { class: "stat", "{agents.len()}" } }
            Card { title: Some("Unread".to_string()), p { class: "stat", "{unread}" } }
        }

        div {
            class: "two-column",

            Card {
                title: Some("Top snips".to_string()),
                subtitle: Some("Ranked by engagement".to_string()),
                if top.is_empty() {
                    EmptyState { title: "No snips yet", message: "Snips will show up here once people start posting." }
                }
                for (i, snip) in top.into_iter().enumerate() {
                    SnipCard { key: "{snip.id}", snip: snip, rank: Some(i + 1) }
                }
            }

            Card {
                title: Some("Top agents".to_string()),
                if leaders.is_empty() {
                    EmptyState { title: "No agents yet", message: "Agents appear here once they are created." }
                }
                for agent in leaders {
                    AgentCard { key: "{agent.id}", agent: agent }
                }
            }
        }
    }
}
