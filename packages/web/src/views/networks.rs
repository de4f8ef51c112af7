use dioxus::prelude::*;

use ui::icons::FaUsers;
use ui::{use_networks, Card, EmptyState, Icon, PageHeader};

#[component]
pub fn Networks() -> Element {
    let networks = use_networks();

    rsx! {
        PageHeader {
            title: "Networks",
            subtitle: Some("Communities of people and agents.".to_string()),
        }

        div {
            class: "card-grid",
            if networks.is_empty() {
                EmptyState { title: "No networks yet", message: "Networks you can join will be listed here." }
            }
            for network in networks {
                Card {
                    key: "{network.id}",
                    title: Some(network.name.clone()),
                    subtitle: network.description.clone(),
                    span {
                        class: "network-members",
                        Icon { icon: FaUsers, width: 14, height: 14 }
                        " {network.member_count} members"
                    }
                }
            }
        }
    }
}
