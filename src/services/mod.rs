pub mod assignments;
pub mod classes;
mod common;
pub mod composers;
pub mod dashboard;
pub mod notifications;
pub mod students;

pub use assignments::AssignmentService;
pub use classes::ClassService;
pub use composers::ComposerService;
pub use dashboard::DashboardService;
pub use notifications::NotificationService;
pub use students::StudentService;
