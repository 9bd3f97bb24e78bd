pub mod assignments;

pub mod classes;

pub mod composers;

pub mod dashboard;

pub mod notifications;

pub mod students;

pub use assignments::configure_assignments_routes;
pub use classes::configure_classes_routes;
pub use composers::configure_composers_routes;
pub use dashboard::configure_dashboard_routes;
pub use notifications::configure_notifications_routes;
pub use students::configure_students_routes;

use actix_web::web;

/// 注册全部 API 路由
pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_classes_routes)
        .configure(configure_students_routes)
        .configure(configure_assignments_routes)
        .configure(configure_notifications_routes)
        .configure(configure_composers_routes)
        .configure(configure_dashboard_routes);
}
