use actix_web::{HttpRequest, HttpResponse, HttpResponseBuilder, Result as ActixResult};
use tracing::{info, warn};

use super::ClassService;
use super::view::delete_prompt;
use crate::cache::{ConfirmationKey, DialogState};
use crate::middlewares::{RequireSession, create_redirect_response};
use crate::models::{ApiResponse, DialogView, Navigation, paths};
use crate::services::{confirm_error_response, session_invalid_response, upstream_error_code};
use crate::session::Session;
use crate::utils::decode_subject;

fn confirmation_key(session: &Session, class_id: i64) -> Option<ConfirmationKey> {
    decode_subject(&session.token)
        .ok()
        .map(|user_id| ConfirmationKey::class(session.role, user_id, class_id))
}

/// 弹窗提示需要班级名称，取不到时用编号代替
async fn prompt_for(
    service: &ClassService,
    request: &HttpRequest,
    token: &str,
    class_id: i64,
) -> String {
    match service.get_client(request).classes().get(token, class_id).await {
        Ok(class) => delete_prompt(&class.class_name),
        Err(_) => delete_prompt(&format!("class #{class_id}")),
    }
}

pub async fn request_delete(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let Some(session) = RequireSession::extract_session(request) else {
        return Ok(create_redirect_response());
    };
    let Some(key) = confirmation_key(&session, class_id) else {
        return Ok(session_invalid_response());
    };

    let state = service.get_confirmations(request).open(&key).await;
    let prompt = prompt_for(service, request, &session.token, class_id).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        DialogView::new(state, prompt),
        "TERMINATE MODULE?",
    )))
}

pub async fn abort_delete(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let Some(session) = RequireSession::extract_session(request) else {
        return Ok(create_redirect_response());
    };
    let Some(key) = confirmation_key(&session, class_id) else {
        return Ok(session_invalid_response());
    };

    let state = service.get_confirmations(request).abort(&key).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        DialogView::new(state, String::new()),
        "TERMINATION_ABORTED",
    )))
}

pub async fn confirm_delete(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let Some(session) = RequireSession::extract_session(request) else {
        return Ok(create_redirect_response());
    };
    let Some(key) = confirmation_key(&session, class_id) else {
        return Ok(session_invalid_response());
    };

    let confirmations = service.get_confirmations(request);
    if let Err(e) = confirmations.begin(&key).await {
        info!("Class deletion refused for {}: {}", key.as_str(), e);
        return Ok(confirm_error_response(e));
    }

    let result = service
        .get_client(request)
        .classes()
        .delete(&session.token, class_id)
        .await;
    confirmations.finish(&key).await;

    match result {
        Ok(()) => {
            info!("Class {} deleted", class_id);
            Ok(HttpResponse::Ok().json(
                ApiResponse::success_empty("MODULE_TERMINATED_SUCCESSFULLY")
                    .navigate(Navigation::after(paths::TEACHER_HOME, 1500)),
            ))
        }
        Err(e) => {
            warn!("Failed to delete class {}: {}", class_id, e);
            Ok(HttpResponseBuilder::new(e.status_code()).json(ApiResponse::error(
                upstream_error_code(&e),
                DialogView::new(DialogState::Idle, String::new()),
                "ERROR: UNAUTHORIZED_DELETION_ATTEMPT",
            )))
        }
    }
}
