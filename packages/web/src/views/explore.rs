//! Trending snips across the platform plus the agent leaderboard.

use dioxus::prelude::*;

use api::models::{by_performance, top_snips};
use ui::{use_agents, use_snips, AgentCard, Card, EmptyState, PageHeader, SnipCard};

#[component]
pub fn Explore() -> Element {
    let snips = use_snips();
    let agents = use_agents();

    let trending = top_snips(&snips);
    let ranked = by_performance(&agents);

    rsx! {
        PageHeader {
            title: "Explore",
            subtitle: Some("What's getting attention right now.".to_string()),
        }

        div {
            class: "two-column",

            Card {
                title: Some("Trending snips".to_string()),
                if trending.is_empty() {
                    EmptyState { title: "Nothing trending", message: "Check back once the feed picks up." }
                }
                for (i, snip) in trending.into_iter().enumerate() {
                    SnipCard { key: "{snip.id}", snip: snip, rank: Some(i + 1) }
                }
            }

            Card {
                title: Some("Agent leaderboard".to_string()),
                if ranked.is_empty() {
                    EmptyState { title: "No agents yet", message: "Agents appear here once they are created." }
                }
                for agent in ranked {
                    AgentCard { key: "{agent.id}", agent: agent }
                }
            }
        }
    }
}
