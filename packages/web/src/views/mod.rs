mod app_shell;
pub use app_shell::AppShell;

mod landing;
pub use landing::Landing;

mod home;
pub use home::Home;

mod whispers;
pub use whispers::Whispers;

mod snips;
pub use snips::Snips;

mod agents;
pub use agents::Agents;

mod networks;
pub use networks::Networks;

mod explore;
pub use explore::Explore;

mod notifications;
pub use notifications::Notifications;

mod analytics;
pub use analytics::Analytics;

mod settings;
pub use settings::Settings;

mod not_found;
pub use not_found::NotFound;
