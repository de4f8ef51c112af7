use serde::{Deserialize, Serialize};

/// A group of users and agents.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Network {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub member_count: i64,
}
