use dioxus::prelude::*;

use ui::{use_route_set, AuthProvider, RouteSet};
use views::{
    Agents, Analytics, AppShell, Explore, Home, Landing, Networks, NotFound, Notifications,
    Settings, Snips, Whispers,
};

mod views;

/// Routes available once the user is signed in.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Home {},
        #[route("/whispers")]
        Whispers {},
        #[route("/snips")]
        Snips {},
        #[route("/agents")]
        Agents {},
        #[route("/networks")]
        Networks {},
        #[route("/explore")]
        Explore {},
        #[route("/notifications")]
        Notifications {},
        #[route("/analytics")]
        Analytics {},
        #[route("/settings")]
        Settings {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// While loading or signed out, every path lands on the landing page.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum PublicRoute {
    #[route("/:..segments")]
    Landing { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::PostgresStore;

    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let settings = api::settings::Settings::new().expect("Failed to load settings");

    // Initialize database pool
    let pool = api::db::get_pool()
        .await
        .expect("Failed to connect to database");

    // Run migrations
    sqlx::migrate!("../api/migrations")
        .run(pool)
        .await
        .expect("Failed to run migrations");

    // Create session store
    let session_store = PostgresStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .expect("Failed to migrate session store");

    let lifetime: tower_sessions::cookie::time::Duration = settings
        .session
        .lifetime_duration()
        .and_then(|lifetime| lifetime.try_into().ok())
        .expect("Session lifetime out of range");
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(settings.session.secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(lifetime));

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .unwrap();
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Stylesheet { href: ui::UI_CSS }
        document::Stylesheet { href: MAIN_CSS }

        AuthProvider {
            RouteGate {}
        }
    }
}

/// Mounts exactly one of the two routers, depending on auth status.
#[component]
fn RouteGate() -> Element {
    match use_route_set() {
        RouteSet::Public => rsx! { Router::<PublicRoute> {} },
        RouteSet::Authenticated => rsx! { Router::<Route> {} },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[derive(Debug, PartialEq)]
    enum Page {
        Public(PublicRoute),
        App(Route),
    }

    fn navigate(set: RouteSet, path: &str) -> Option<Page> {
        match set {
            RouteSet::Public => PublicRoute::from_str(path).ok().map(Page::Public),
            RouteSet::Authenticated => Route::from_str(path).ok().map(Page::App),
        }
    }

    #[test]
    fn test_loading_shows_landing_for_any_path() {
        let set = RouteSet::from_flags(true, false);
        assert_eq!(
            navigate(set, "/agents"),
            Some(Page::Public(PublicRoute::Landing {
                segments: vec!["agents".to_string()]
            }))
        );
        assert_eq!(
            navigate(set, "/"),
            Some(Page::Public(PublicRoute::Landing { segments: vec![] }))
        );
    }

    #[test]
    fn test_signed_out_cannot_reach_app_pages() {
        let set = RouteSet::from_flags(false, false);
        assert!(matches!(navigate(set, "/analytics"), Some(Page::Public(_))));
    }

    #[test]
    fn test_authenticated_routes() {
        let set = RouteSet::from_flags(false, true);
        let cases = [
            ("/", Route::Home {}),
            ("/whispers", Route::Whispers {}),
            ("/snips", Route::Snips {}),
            ("/agents", Route::Agents {}),
            ("/networks", Route::Networks {}),
            ("/explore", Route::Explore {}),
            ("/notifications", Route::Notifications {}),
            ("/analytics", Route::Analytics {}),
            ("/settings", Route::Settings {}),
        ];
        for (path, route) in cases {
            assert_eq!(navigate(set, path), Some(Page::App(route)), "{path}");
        }
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let set = RouteSet::from_flags(false, true);
        assert_eq!(
            navigate(set, "/no/such/page"),
            Some(Page::App(Route::NotFound {
                segments: vec!["no".to_string(), "such".to_string(), "page".to_string()]
            }))
        );
    }

    #[test]
    fn test_route_display() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::Analytics {}.to_string(), "/analytics");
    }
}
