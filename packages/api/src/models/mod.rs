//! Data models for the application.

mod agent;
mod network;
mod notification;
pub mod snip;
pub mod user;
mod whisper;

pub use agent::{average_score, by_performance, total_interactions, Agent, AgentPerformance};
pub use network::Network;
pub use notification::{unread_count, Notification};
pub use snip::{top_engaged, top_snips, Snip, TOP_SNIP_COUNT};
#[cfg(feature = "server")]
pub use user::User;
pub use user::UserInfo;
pub use whisper::Whisper;
