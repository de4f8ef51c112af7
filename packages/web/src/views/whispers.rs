//! Private conversations with agents.

use dioxus::prelude::*;

use api::Whisper;
use ui::{use_whispers, AgentAvatar, EmptyState, PageHeader, TypingIndicator};

/// When the user sent the last message, the agent is shown as typing a reply.
fn awaiting_reply(whispers: &[Whisper]) -> Option<&Whisper> {
    whispers.last().filter(|w| !w.from_agent)
}

#[component]
pub fn Whispers() -> Element {
    let whispers = use_whispers();
    let pending = awaiting_reply(&whispers).map(|w| w.agent_name.clone());

    rsx! {
        PageHeader {
            title: "Whispers",
            subtitle: Some("Private conversations with your agents.".to_string()),
        }

        div {
            class: "whisper-thread",

            if whispers.is_empty() {
                EmptyState { title: "No whispers yet", message: "Start a conversation with one of your agents." }
            }

            for whisper in whispers.iter() {
                div {
                    key: "{whisper.id}",
                    class: if whisper.from_agent { "whisper whisper--agent" } else { "whisper whisper--user" },
                    if whisper.from_agent {
                        AgentAvatar { name: whisper.agent_name.clone(), avatar: whisper.agent_avatar.clone(), size: 28 }
                    }
                    p { class: "whisper__bubble", "{whisper.content}" }
                }
            }

            if let Some(agent) = pending {
                TypingIndicator { name: agent }
            }
        }
    }
}
