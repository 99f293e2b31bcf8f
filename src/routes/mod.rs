pub mod achievements;

pub mod assignments;

pub mod auth;

pub mod lessons;

pub mod links;

pub mod messages;

pub mod progress;

pub mod submissions;

pub mod system;

pub mod users;

pub mod ws;

pub use achievements::configure_achievement_routes;
pub use assignments::configure_assignment_routes;
pub use auth::configure_auth_routes;
pub use lessons::configure_lesson_routes;
pub use links::configure_link_routes;
pub use messages::configure_message_routes;
pub use progress::configure_progress_routes;
pub use submissions::configure_submission_routes;
pub use system::configure_system_routes;
pub use users::configure_user_routes;
pub use ws::configure_ws_routes;
