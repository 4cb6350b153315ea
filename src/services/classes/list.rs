use actix_web::{HttpRequest, HttpResponse, HttpResponseBuilder, Result as ActixResult};
use tracing::error;

use super::ClassService;
use crate::middlewares::{RequireSession, create_redirect_response};
use crate::models::classes::responses::{ClassCard, TeacherHomeView};
use crate::models::{ApiResponse, paths};
use crate::services::upstream_error_code;

pub async fn teacher_home(
    service: &ClassService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(session) = RequireSession::extract_session(request) else {
        return Ok(create_redirect_response());
    };

    let client = service.get_client(request);
    match client.classes().list_mine(&session.token).await {
        Ok(classes) => {
            let count = classes.len();
            let view = TeacherHomeView {
                classes: classes.into_iter().map(ClassCard::from).collect(),
                add_link: paths::ADD_CLASS.to_string(),
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                view,
                format!("{count} ACTIVE_MODULES"),
            )))
        }
        Err(e) => {
            error!("SYSTEM_FETCH_ERROR: {}", e);
            // 页面照常渲染，只是列表为空
            let view = TeacherHomeView {
                classes: Vec::new(),
                add_link: paths::ADD_CLASS.to_string(),
            };
            Ok(HttpResponseBuilder::new(e.status_code()).json(ApiResponse::error(
                upstream_error_code(&e),
                view,
                "SYSTEM_FETCH_ERROR",
            )))
        }
    }
}
