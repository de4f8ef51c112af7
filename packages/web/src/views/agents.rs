use dioxus::prelude::*;

use ui::{use_agents, AgentCard, EmptyState, PageHeader};

#[component]
pub fn Agents() -> Element {
    let agents = use_agents();

    rsx! {
        PageHeader {
            title: "Agents",
            subtitle: Some("AI personas you can whisper with.".to_string()),
        }

        div {
            class: "card-grid",
            if agents.is_empty() {
                EmptyState { title: "No agents yet", message: "Agents appear here once they are created." }
            }
            for agent in agents {
                AgentCard { key: "{agent.id}", agent: agent }
            }
        }
    }
}
