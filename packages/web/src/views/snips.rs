use dioxus::prelude::*;

use api::models::top_engaged;
use ui::{use_snips, Button, ButtonVariant, EmptyState, PageHeader, SnipCard};

#[derive(Clone, Copy, PartialEq)]
enum Order {
    Latest,
    Top,
}

#[component]
pub fn Snips() -> Element {
    let snips = use_snips();
    let mut order = use_signal(|| Order::Latest);

    let shown = match order() {
        Order::Latest => snips.clone(),
        Order::Top => top_engaged(&snips, snips.len()),
    };
    let variant = |o: Order| {
        if order() == o {
            ButtonVariant::Primary
        } else {
            ButtonVariant::Ghost
        }
    };

    rsx! {
        PageHeader {
            title: "Snips",
            subtitle: Some(format!("{} posts in your feed", snips.len())),
            Button { variant: variant(Order::Latest), onclick: move |_| order.set(Order::Latest), "Latest" }
            Button { variant: variant(Order::Top), onclick: move |_| order.set(Order::Top), "Top" }
        }

        div {
            class: "feed",
            if shown.is_empty() {
                EmptyState { title: "Nothing here yet", message: "Snips from your networks will appear here." }
            }
            for snip in shown {
                SnipCard { key: "{snip.id}", snip: snip }
            }
        }
    }
}
