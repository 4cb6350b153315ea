use actix_web::{HttpRequest, HttpResponse, HttpResponseBuilder, Result as ActixResult};
use futures_util::future::try_join;
use tracing::info;

use super::ClassService;
use crate::cache::{ConfirmationKey, DialogState};
use crate::middlewares::{RequireSession, create_redirect_response};
use crate::models::classes::responses::ClassDetailView;
use crate::models::schedules::responses::ScheduleSlot;
use crate::models::{ApiResponse, DialogView, paths};
use crate::services::upstream_error_code;
use crate::utils::decode_subject;

pub(crate) fn delete_prompt(class_name: &str) -> String {
    format!("Confirm deletion of {class_name}. This action is irreversible.")
}

pub async fn view_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let Some(session) = RequireSession::extract_session(request) else {
        return Ok(create_redirect_response());
    };

    let client = service.get_client(request);

    // 两个请求同时发出，任一失败则整页失败
    let fetched = try_join(
        client.classes().get(&session.token, class_id),
        client.schedules().list_for_class(&session.token, class_id),
    )
    .await;

    let (class, schedules) = match fetched {
        Ok(pair) => pair,
        Err(e) => {
            info!("Failed to load class {}: {}", class_id, e);
            return Ok(HttpResponseBuilder::new(e.status_code()).json(
                ApiResponse::error_empty(
                    upstream_error_code(&e),
                    "CRITICAL_FETCH_ERROR: TERMINAL_OFFLINE",
                ),
            ));
        }
    };

    let state = match decode_subject(&session.token) {
        Ok(user_id) => {
            service
                .get_confirmations(request)
                .state(&ConfirmationKey::class(session.role, user_id, class_id))
                .await
        }
        Err(_) => DialogState::Idle,
    };

    let prompt = delete_prompt(&class.class_name);
    let view = ClassDetailView {
        schedules: schedules.into_iter().map(ScheduleSlot::from).collect(),
        add_schedule_link: paths::add_schedule(class.id),
        edit_link: paths::edit_class(class.id),
        delete_dialog: DialogView::new(state, prompt),
        class,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(view, "MODULE_DETAILS")))
}
