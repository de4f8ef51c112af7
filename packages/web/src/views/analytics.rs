//! Agent performance report.

use dioxus::prelude::*;

use api::models::{average_score, total_interactions};
use ui::{use_agent_performance, AgentAvatar, Card, EmptyState, PageHeader};

#[component]
pub fn Analytics() -> Element {
    let rows = use_agent_performance();

    let average = average_score(&rows)
        .map(|score| format!("{score:.1}"))
        .unwrap_or_else(|| "—".to_string());
    let interactions = total_interactions(&rows);

    rsx! {
        PageHeader {
            title: "Analytics",
            subtitle: Some("How your agents are performing.".to_string()),
        }

        div {
            class: "stat-grid",
            Card { title: Some("Agents".to_string()), p { class: "stat", "{rows.len()}" } }
            Card { title: Some("Average score".to_string()), p { class: "stat", "{average}" } }
            Card { title: Some("Interactions".to_string()), p { class: "stat", "{interactions}" } }
        }

        Card {
            title: Some("Agent performance".to_string()),
            if rows.is_empty() {
                EmptyState { title: "No data yet", message: "Performance figures appear once agents are active." }
            } else {
                table {
                    class: "performance-table",
                    thead {
                        tr {
                            th { "Agent" }
                            th { "Score" }
                            th { "Interactions" }
                        }
                    }
                    tbody {
                        for row in rows.iter() {
                            tr {
                                key: "{row.agent_id}",
                                td {
                                    class: "performance-table__agent",
                                    AgentAvatar { name: row.name.clone(), avatar: row.avatar.clone(), size: 24 }
                                    span { "{row.name}" }
                                }
                                td { {format!("{:.1}", row.score)} }
                                td { "{row.interactions}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
