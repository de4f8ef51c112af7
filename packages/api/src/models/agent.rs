//! AI agents and their performance figures.

use serde::{Deserialize, Serialize};

/// An AI persona.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Agent {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Gradient identifier for the avatar, e.g. `"sunset"`.
    pub avatar: Option<String>,
    pub performance_score: Option<f64>,
}

/// One row of the agent performance report.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct AgentPerformance {
    pub agent_id: i64,
    pub name: String,
    pub avatar: Option<String>,
    pub score: f64,
    pub interactions: i64,
}

/// Missing and NaN scores rank below every real score.
fn rank_key(agent: &Agent) -> f64 {
    agent
        .performance_score
        .filter(|score| !score.is_nan())
        .unwrap_or(f64::NEG_INFINITY)
}

/// Agents ordered by performance score, best first. Unscored agents go last.
pub fn by_performance(agents: &[Agent]) -> Vec<Agent> {
    let mut ranked = agents.to_vec();
    ranked.sort_by(|a, b| rank_key(b).total_cmp(&rank_key(a)));
    ranked
}

/// Mean score across the report, `None` for an empty report.
pub fn average_score(rows: &[AgentPerformance]) -> Option<f64> {
    if rows.is_empty() {
        return None;
    }
    Some(rows.iter().map(|r| r.score).sum::<f64>() / rows.len() as f64)
}

pub fn total_interactions(rows: &[AgentPerformance]) -> i64 {
    rows.iter().map(|r| r.interactions).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent(id: i64, score: Option<f64>) -> Agent {
        Agent {
            id,
            name: format!("agent {id}"),
            performance_score: score,
            ..Default::default()
        }
    }

    #[test]
    fn test_by_performance() {
        let ranked = by_performance(&[agent(1, None), agent(2, Some(40.0)), agent(3, Some(92.5))]);
        let ids: Vec<i64> = ranked.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_nan_score_ranks_with_unscored() {
        let ranked = by_performance(&[agent(1, Some(f64::NAN)), agent(2, Some(10.0)), agent(3, None)]);
        let ids: Vec<i64> = ranked.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_report_totals() {
        let rows = vec![
            AgentPerformance { agent_id: 1, score: 80.0, interactions: 3, ..Default::default() },
            AgentPerformance { agent_id: 2, score: 60.0, interactions: 5, ..Default::default() },
        ];
        assert_eq!(average_score(&rows), Some(70.0));
        assert_eq!(total_interactions(&rows), 8);
        assert_eq!(average_score(&[]), None);
    }
}
