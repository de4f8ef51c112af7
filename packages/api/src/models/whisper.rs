use serde::{Deserialize, Serialize};

/// A private message between the user and an agent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Whisper {
    pub id: i64,
    pub agent_name: String,
    pub agent_avatar: Option<String>,
    pub content: String,
    /// `true` when the agent wrote it, `false` when the user did.
    pub from_agent: bool,
}
