//! Snips (short feed posts) and engagement ranking.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

/// How many snips the dashboard and explore views highlight.
pub const TOP_SNIP_COUNT: usize = 5;

/// A short user-authored feed post.
///
/// Counters are nullable in storage; a missing counter reads as zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Snip {
    pub id: i64,
    pub title: Option<String>,
    pub content: String,
    pub author_name: Option<String>,
    #[serde(default)]
    pub likes: Option<i32>,
    #[serde(default)]
    pub comments: Option<i32>,
    #[serde(default)]
    pub shares: Option<i32>,
}

impl Snip {
    pub fn like_count(&self) -> i64 {
        self.likes.unwrap_or(0).into()
    }

    pub fn comment_count(&self) -> i64 {
        self.comments.unwrap_or(0).into()
    }

    pub fn share_count(&self) -> i64 {
        self.shares.unwrap_or(0).into()
    }

    /// `likes + 2 * comments + 3 * shares`. Only used for ranking, never stored.
    pub fn engagement_score(&self) -> i64 {
        self.like_count() + 2 * self.comment_count() + 3 * self.share_count()
    }
}

/// The `k` snips with the highest engagement score, best first.
///
/// The sort is stable: equal scores keep their input order.
pub fn top_engaged(snips: &[Snip], k: usize) -> Vec<Snip> {
    let mut ranked = snips.to_vec();
    ranked.sort_by_key(|snip| Reverse(snip.engagement_score()));
    ranked.truncate(k);
    ranked
}

/// [`top_engaged`] with [`TOP_SNIP_COUNT`].
pub fn top_snips(snips: &[Snip]) -> Vec<Snip> {
    top_engaged(snips, TOP_SNIP_COUNT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snip(id: i64, likes: i32, comments: i32, shares: i32) -> Snip {
        Snip {
            id,
            content: format!("snip {id}"),
            likes: Some(likes),
            comments: Some(comments),
            shares: Some(shares),
            ..Default::default()
        }
    }

    fn ids(snips: &[Snip]) -> Vec<i64> {
        snips.iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_engagement_score_weights() {
        assert_eq!(snip(1, 10, 0, 0).engagement_score(), 10);
        assert_eq!(snip(2, 0, 0, 4).engagement_score(), 12);
        assert_eq!(snip(3, 1, 2, 3).engagement_score(), 1 + 4 + 9);
    }

    #[test]
    fn test_missing_counters_are_zero() {
        let s = Snip {
            id: 1,
            content: "quiet".to_string(),
            ..Default::default()
        };
        assert_eq!(s.engagement_score(), 0);
    }

    #[test]
    fn test_shares_outrank_likes() {
        let ranked = top_snips(&[snip(1, 10, 0, 0), snip(2, 0, 0, 4)]);
        assert_eq!(ids(&ranked), vec![2, 1]);
    }

    #[test]
    fn test_empty_input() {
        assert!(top_snips(&[]).is_empty());
    }

    #[test]
    fn test_truncates_to_five() {
        let snips: Vec<Snip> = (0..8).map(|i| snip(i, i as i32, 0, 0)).collect();
        let ranked = top_snips(&snips);
        assert_eq!(ranked.len(), TOP_SNIP_COUNT);
        assert_eq!(ids(&ranked), vec![7, 6, 5, 4, 3]);
    }

    #[test]
    fn test_shorter_input_is_kept_whole() {
        let ranked = top_snips(&[snip(1, 1, 0, 0), snip(2, 3, 0, 0)]);
        assert_eq!(ids(&ranked), vec![2, 1]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        // 6, 6, 6 via different mixes, then a lower and a higher score.
        let snips = vec![
            snip(1, 6, 0, 0),
            snip(2, 0, 3, 0),
            snip(3, 2, 0, 0),
            snip(4, 0, 0, 2),
            snip(5, 0, 0, 5),
        ];
        let ranked = top_snips(&snips);
        assert_eq!(ids(&ranked), vec![5, 1, 2, 4, 3]);
        let scores: Vec<i64> = ranked.iter().map(Snip::engagement_score).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_does_not_mutate_input() {
        let snips = vec![snip(1, 0, 0, 0), snip(2, 9, 0, 0)];
        let _ = top_snips(&snips);
        assert_eq!(ids(&snips), vec![1, 2]);
    }
}
