//! Sidebar layout wrapping every signed-in page.

use dioxus::prelude::*;

use ui::icons::{FaBell, FaBolt, FaChartLine, FaCommentDots, FaCompass, FaGear, FaHouse, FaNetworkWired, FaRobot};
use ui::{use_auth, Icon, UserAvatar};

use crate::Route;

#[component]
pub fn AppShell() -> Element {
    let auth = use_auth();
    let user = auth.read().user().cloned();
    let name = user.clone().unwrap_or_default().display_name();

    rsx! {
        div {
            class: "app-shell",

            nav {
                class: "app-sidebar",

                div {
                    class: "app-sidebar__brand",
                    "Snipnet"
                }

                div {
                    class: "app-sidebar__links",
                    NavLink { to: Route::Home {}, label: "Dashboard", Icon { icon: FaHouse, width: 16, height: 16 } }
                    NavLink { to: Route::Whispers {}, label: "Whispers", Icon { icon: FaCommentDots, width: 16, height: 16 } }
                    NavLink { to: Route::Snips {}, label: "Snips", Icon { icon: FaBolt, width: 16, height: 16 } }
                    NavLink { to: Route::Agents {}, label: "Agents", Icon { icon: FaRobot, width: 16, height: 16 } }
                    NavLink { to: Route::Networks {}, label: "Networks", Icon { icon: FaNetworkWired, width: 16, height: 16 } }
                    NavLink { to: Route::Explore {}, label: "Explore", Icon { icon: FaCompass, width: 16, height: 16 } }
                    NavLink { to: Route::Notifications {}, label: "Notifications", Icon { icon: FaBell, width: 16, height: 16 } }
                    NavLink { to: Route::Analytics {}, label: "Analytics", Icon { icon: FaChartLine, width: 16, height: 16 } }
                    NavLink { to: Route::Settings {}, label: "Settings", Icon { icon: FaGear, width: 16, height: 16 } }
                }

                div {
                    class: "app-sidebar__user",
                    UserAvatar { user: user, size: 32 }
                    span { class: "app-sidebar__user-name", "{name}" }
                }
            }

            main {
                class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn NavLink(to: Route, label: String, children: Element) -> Element {
    rsx! {
        Link {
            class: "nav-link",
            active_class: "nav-link--active",
            to: to,
            {children}
            span { "{label}" }
        }
    }
}
