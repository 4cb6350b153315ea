use actix_web::{HttpRequest, HttpResponse, HttpResponseBuilder, Result as ActixResult};
use tracing::info;

use super::AccountService;
use super::delete::DELETE_PROMPT;
use crate::cache::ConfirmationKey;
use crate::middlewares::{RequireSession, create_redirect_response};
use crate::models::users::responses::AccountView;
use crate::models::{ApiResponse, DialogView, paths};
use crate::services::{session_invalid_response, upstream_error_code};
use crate::utils::decode_subject;

pub async fn view_account(
    service: &AccountService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(session) = RequireSession::extract_session(request) else {
        return Ok(create_redirect_response());
    };

    let user_id = match decode_subject(&session.token) {
        Ok(id) => id,
        Err(e) => {
            info!("Cannot read user id from session token: {}", e);
            return Ok(session_invalid_response());
        }
    };

    let client = service.get_client(request);
    let account = match client.accounts(session.role).get(&session.token, user_id).await {
        Ok(account) => account,
        Err(e) => {
            info!("Failed to load {} account {}: {}", session.role, user_id, e);
            return Ok(HttpResponseBuilder::new(e.status_code()).json(
                ApiResponse::error_empty(
                    upstream_error_code(&e),
                    "ERROR: UNABLE_TO_REACH_DATABASE",
                ),
            ));
        }
    };

    let state = service
        .get_confirmations(request)
        .state(&ConfirmationKey::account(session.role, user_id))
        .await;

    let view = AccountView {
        title: session.role.profile_title().to_string(),
        role: session.role,
        account,
        edit_link: paths::EDIT_ACCOUNT.to_string(),
        delete_dialog: DialogView::new(state, DELETE_PROMPT),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(view, "PROFILE_LOADED")))
}
