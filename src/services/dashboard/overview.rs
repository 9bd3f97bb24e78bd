use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::future::try_join4;

use super::DashboardService;
use crate::domain::dashboard::{recent_activity, stats};
use crate::models::dashboard::responses::DashboardResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::error_response;

pub async fn get_dashboard(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    // 四个列表并发读取，整体耗时取决于最慢的一个
    let loaded = try_join4(
        storage.classes().get_all(),
        storage.students().get_all(),
        storage.assignments().get_all(),
        storage.notifications().get_all(),
    )
    .await;

    let (classes, students, assignments, notifications) = match loaded {
        Ok(lists) => lists,
        Err(e) => {
            return Ok(error_response(
                &e,
                ErrorCode::NotFound,
                ErrorCode::InternalServerError,
            ));
        }
    };

    let now = chrono::Utc::now();
    let response = DashboardResponse {
        stats: stats(&classes, &students, &assignments, &notifications, now),
        recent_activity: recent_activity(&assignments, &notifications),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Dashboard retrieved successfully",
    )))
}
