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
pub mod websocket;

pub use achievements::AchievementService;
pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use lessons::LessonService;
pub use links::LinkService;
pub use messages::MessageService;
pub use progress::ProgressService;
pub use submissions::SubmissionService;
pub use system::SystemService;
pub use users::UserService;
