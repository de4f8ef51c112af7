use dioxus::prelude::*;

use api::models::unread_count;
use ui::{use_notifications, EmptyState, PageHeader};

#[component]
pub fn Notifications() -> Element {
    let notifications = use_notifications();
    let unread = unread_count(&notifications);

    rsx! {
        PageHeader {
            title: "Notifications",
            subtitle: Some(format!("{unread} unread")),
        }

        div {
            class: "notification-list",
            if notifications.is_empty() {
                EmptyState { title: "All caught up", message: "You have no notifications." }
            }
            for notification in notifications {
                div {
                    key: "{notification.id}",
                    class: if notification.read { "notification" } else { "notification notification--unread" },
                    p { class: "notification__message", "{notification.message}" }
                    span { class: "notification__time", "{notification.created_at}" }
                }
            }
        }
    }
}
