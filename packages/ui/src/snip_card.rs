use api::Snip;
use dioxus::prelude::*;

use crate::card::Card;
use crate::icons::{FaComment, FaHeart, FaShare};
use crate::Icon;

/// One feed post with its counters. Pass `rank` to show its position in a ranking.
#[component]
pub fn SnipCard(snip: Snip, rank: Option<usize>) -> Element {
    let author = snip.author_name.clone().unwrap_or_else(|| "Anonymous".to_string());

    rsx! {
        Card {
            title: snip.title.clone(),
            subtitle: Some(author),
            class: "snip-card",
            if let Some(rank) = rank {
                span { class: "snip-card__rank", "#{rank}" }
            }
            p { class: "snip-card__content", "{snip.content}" }
            footer {
                class: "snip-card__stats",
                span {
                    class: "snip-card__stat",
                    title: "Likes",
                    Icon { icon: FaHeart, width: 12, height: 12 }
                    " {snip.like_count()}"
                }
                span {
                    class: "snip-card__stat",
                    title: "Comments",
                    Icon { icon: FaComment, width: 12, height: 12 }
                    " {snip.comment_count()}"
                }
                span {
                    class: "snip-card__stat",
                    title: "Shares",
                    Icon { icon: FaShare, width: 12, height: 12 }
                    " {snip.share_count()}"
                }
                span {
                    class: "snip-card__score",
                    title: "Engagement",
                    "{snip.engagement_score()} pts"
                }
            }
        }
    }
}
