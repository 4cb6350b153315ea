use actix_web::{HttpRequest, HttpResponse, HttpResponseBuilder, Result as ActixResult};
use tracing::{info, warn};

use super::AccountService;
use crate::cache::{ConfirmationKey, DialogState};
use crate::middlewares::{RequireSession, create_redirect_response};
use crate::models::{ApiResponse, DialogView, Navigation, paths};
use crate::services::{
    confirm_error_response, session_context, session_invalid_response, upstream_error_code,
};
use crate::session::Session;
use crate::utils::decode_subject;

pub(crate) const DELETE_PROMPT: &str = "This action is permanent and cannot be undone.";

fn confirmation_key(session: &Session) -> Option<ConfirmationKey> {
    decode_subject(&session.token)
        .ok()
        .map(|id| ConfirmationKey::account(session.role, id))
}

pub async fn request_delete(
    service: &AccountService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(session) = RequireSession::extract_session(request) else {
        return Ok(create_redirect_response());
    };
    let Some(key) = confirmation_key(&session) else {
        return Ok(session_invalid_response());
    };

    let state = service.get_confirmations(request).open(&key).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        DialogView::new(state, DELETE_PROMPT),
        "TERMINATE?",
    )))
}

pub async fn abort_delete(
    service: &AccountService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(session) = RequireSession::extract_session(request) else {
        return Ok(create_redirect_response());
    };
    let Some(key) = confirmation_key(&session) else {
        return Ok(session_invalid_response());
    };

    let state = service.get_confirmations(request).abort(&key).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        DialogView::new(state, DELETE_PROMPT),
        "TERMINATION_ABORTED",
    )))
}

pub async fn confirm_delete(
    service: &AccountService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(session) = RequireSession::extract_session(request) else {
        return Ok(create_redirect_response());
    };
    let Ok(user_id) = decode_subject(&session.token) else {
        return Ok(session_invalid_response());
    };
    let key = ConfirmationKey::account(session.role, user_id);

    let confirmations = service.get_confirmations(request);
    if let Err(e) = confirmations.begin(&key).await {
        info!("Account deletion refused for {}: {}", key.as_str(), e);
        return Ok(confirm_error_response(e));
    }

    let client = service.get_client(request);
    let result = client
        .accounts(session.role)
        .delete(&session.token, user_id)
        .await;
    confirmations.finish(&key).await;

    match result {
        Ok(()) => {
            info!("{} account {} deleted", session.role, user_id);

            let mut context = session_context(request);
            context.clear();

            let mut response = HttpResponse::Ok();
            context.store().apply(&mut response);
            Ok(response.json(
                ApiResponse::success_empty("ACCOUNT_DELETED: SYSTEM_CLEAN")
                    .navigate(Navigation::after(paths::HOME, 2000)),
            ))
        }
        Err(e) => {
            warn!("Failed to delete account {}: {}", user_id, e);
            Ok(HttpResponseBuilder::new(e.status_code()).json(ApiResponse::error(
                upstream_error_code(&e),
                DialogView::new(DialogState::Idle, DELETE_PROMPT),
                "FAILED_TO_TERMINATE_ACCOUNT",
            )))
        }
    }
}
