//! Data hooks keyed by API path.
//!
//! Each hook wraps a server function in a `use_resource` and hands the view a
//! plain `Vec`. Until the fetch resolves, and when it fails, the view sees an
//! empty list; failures are logged and otherwise look like "no data yet".
//!
//! A [`QueryKey`] names the endpoint for logging only. Nothing is cached by key:
//! every mounted view owns its resource and fetches again when it mounts.

use std::future::Future;

use api::{Agent, AgentPerformance, Network, Notification, Snip, Whisper};
use dioxus::prelude::*;

/// Identifies a query by the path of the endpoint that answers it.
/// Used as a log field; it is not a cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Snips,
    Agents,
    AgentPerformance,
    Networks,
    Notifications,
    Whispers,
}

impl QueryKey {
    pub const fn path(self) -> &'static str {
        match self {
            QueryKey::Snips => "/api/snips",
            QueryKey::Agents => "/api/agents",
            QueryKey::AgentPerformance => "/api/analytics/agent-performance",
            QueryKey::Networks => "/api/networks",
            QueryKey::Notifications => "/api/notifications",
            QueryKey::Whispers => "/api/whispers",
        }
    }
}

/// Rows of a resolved query, or an empty list while pending or after an error.
pub fn rows_or_empty<T: Clone, E>(state: Option<&Result<Vec<T>, E>>) -> Vec<T> {
    match state {
        Some(Ok(rows)) => rows.clone(),
        Some(Err(_)) | None => Vec::new(),
    }
}

/// Run `fetch` once per mount and return its rows.
pub fn use_query<T, Fut>(key: QueryKey, mut fetch: impl FnMut() -> Fut + 'static) -> Vec<T>
where
    T: Clone + 'static,
    Fut: Future<Output = Result<Vec<T>, ServerFnError>> + 'static,
{
    let resource = use_resource(move || {
        let request = fetch();
        async move {
            let result = request.await;
            match &result {
                Ok(rows) => tracing::debug!(path = key.path(), rows = rows.len(), "query resolved"),
                Err(e) => tracing::warn!(path = key.path(), "query failed: {}", e),
            }
            result
        }
    });

    let state = resource.read();
    rows_or_empty((*state).as_ref())
}

pub fn use_snips() -> Vec<Snip> {
    use_query(QueryKey::Snips, api::list_snips)
}

pub fn use_agents() -> Vec<Agent> {
    use_query(QueryKey::Agents, api::list_agents)
}

pub fn use_agent_performance() -> Vec<AgentPerformance> {
    use_query(QueryKey::AgentPerformance, api::agent_performance)
}

pub fn use_networks() -> Vec<Network> {
    use_query(QueryKey::Networks, api::list_networks)
}

pub fn use_notifications() -> Vec<Notification> {
    use_query(QueryKey::Notifications, api::list_notifications)
}

pub fn use_whispers() -> Vec<Whisper> {
    use_query(QueryKey::Whispers, api::list_whispers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_query_is_empty() {
        let rows: Vec<i32> = rows_or_empty::<i32, String>(None);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_failed_query_is_empty() {
        let failed: Result<Vec<i32>, String> = Err("boom".to_string());
        assert!(rows_or_empty(Some(&failed)).is_empty());
    }

    #[test]
    fn test_resolved_query_returns_rows() {
        let resolved: Result<Vec<i32>, String> = Ok(vec![1, 2, 3]);
        assert_eq!(rows_or_empty(Some(&resolved)), vec![1, 2, 3]);
    }

    #[test]
    fn test_paths_are_api_routes() {
        assert_eq!(QueryKey::AgentPerformance.path(), "/api/analytics/agent-performance");
        assert_eq!(QueryKey::Snips.path(), "/api/snips");
        assert!(QueryKey::Whispers.path().starts_with("/api/"));
    }

    #[test]
    fn test_paths_are_distinct() {
        let keys = [
            QueryKey::Snips,
            QueryKey::Agents,
            QueryKey::AgentPerformance,
            QueryKey::Networks,
            QueryKey::Notifications,
            QueryKey::Whispers,
        ];
        let paths: std::collections::HashSet<_> = keys.iter().map(|k| k.path()).collect();
        assert_eq!(paths.len(), keys.len());
    }
}
