use api::Agent;
use dioxus::prelude::*;

use crate::avatar::AgentAvatar;
use crate::card::Card;

#[component]
pub fn AgentCard(agent: Agent) -> Element {
    let score = agent
        .performance_score
        .map(|score| format!("{score:.1}"))
        .unwrap_or_else(|| "—".to_string());

    rsx! {
        Card {
            class: "agent-card",
            div {
                class: "agent-card__header",
                AgentAvatar { name: agent.name.clone(), avatar: agent.avatar.clone() }
                div {
                    h3 { class: "agent-card__name", "{agent.name}" }
                    span { class: "agent-card__score", "Performance {score}" }
                }
            }
            if let Some(description) = &agent.description {
                p { class: "agent-card__description", "{description}" }
            }
        }
    }
}
