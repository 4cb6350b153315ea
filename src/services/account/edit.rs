use actix_web::{HttpRequest, HttpResponse, HttpResponseBuilder, Result as ActixResult};
use tracing::info;

use super::AccountService;
use crate::middlewares::{RequireSession, create_redirect_response};
use crate::models::users::entities::UserRole;
use crate::models::users::requests::{AccountUpdate, EditAccountRequest};
use crate::models::users::responses::{AccountForm, EditAccountView};
use crate::models::{ApiResponse, Navigation, paths};
use crate::services::{
    session_invalid_response, upstream_error_code, upstream_error_response,
    validation_error_response,
};
use crate::utils::decode_subject;
use crate::utils::validate::{validate_contact, validate_experience_years, validate_password};

const UPDATE_FAILED: &str = "UPDATE_FAILED";
const UNEXPECTED: &str = "UNEXPECTED_CORE_ERROR";

pub async fn edit_page(
    service: &AccountService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(session) = RequireSession::extract_session(request) else {
        return Ok(create_redirect_response());
    };

    // 编辑页拿不到用户 ID 时直接回登录页
    let Ok(user_id) = decode_subject(&session.token) else {
        return Ok(create_redirect_response());
    };

    let client = service.get_client(request);
    match client.accounts(session.role).get(&session.token, user_id).await {
        Ok(account) => {
            let view = EditAccountView {
                role: session.role,
                form: AccountForm::from(account),
                read_only_fields: vec!["email".to_string()],
                cancel_link: paths::ACCOUNT.to_string(),
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(view, "EDIT_PROFILE")))
        }
        Err(e) => {
            info!("Failed to load account {} for editing: {}", user_id, e);
            Ok(HttpResponseBuilder::new(e.status_code()).json(ApiResponse::error_empty(
                upstream_error_code(&e),
                "FAILED_TO_LOAD_USER_DATA",
            )))
        }
    }
}

fn validate_edit(request: &EditAccountRequest) -> Result<(), &'static str> {
    if !validate_contact(&request.contact) {
        return Err("CONTACT_ERROR: Must be 10 digits.");
    }
    // 留空表示不修改密码
    if !request.password.is_empty() && !validate_password(&request.password) {
        return Err("SECURITY_ERROR: Pass must be 10+ chars with Mix.");
    }
    if request
        .experience_years
        .is_some_and(|years| !validate_experience_years(years))
    {
        return Err("VALIDATION_ERROR: Experience years cannot be negative.");
    }
    Ok(())
}

pub async fn update_account(
    service: &AccountService,
    request: &HttpRequest,
    edit_request: EditAccountRequest,
) -> ActixResult<HttpResponse> {
    let Some(session) = RequireSession::extract_session(request) else {
        return Ok(create_redirect_response());
    };

    if let Err(message) = validate_edit(&edit_request) {
        return Ok(validation_error_response(message));
    }

    let Ok(user_id) = decode_subject(&session.token) else {
        return Ok(session_invalid_response());
    };

    let client = service.get_client(request);
    let accounts = client.accounts(session.role);

    // id 与 email 不可修改，以后端当前记录为准
    let current = match accounts.get(&session.token, user_id).await {
        Ok(account) => account,
        Err(e) => {
            info!("Failed to reload account {} before update: {}", user_id, e);
            return Ok(upstream_error_response(
                &e,
                e.display_message(UPDATE_FAILED, UNEXPECTED),
            ));
        }
    };

    let experience_years = match session.role {
        UserRole::Teacher => edit_request.experience_years.or(current.experience_years),
        UserRole::Student => None,
    };

    let record = AccountUpdate {
        id: current.id,
        fname: edit_request.fname,
        lname: edit_request.lname,
        email: current.email,
        contact: edit_request.contact,
        username: edit_request.username,
        password: Some(edit_request.password).filter(|p| !p.is_empty()),
        experience_years,
    };

    match accounts.update(&session.token, &record).await {
        Ok(()) => {
            info!("{} account {} updated", session.role, record.id);
            Ok(HttpResponse::Ok().json(
                ApiResponse::success_empty("UPDATE_SUCCESSFUL: SYSTEM_SYNCED")
                    .navigate(Navigation::after(paths::ACCOUNT, 1500)),
            ))
        }
        Err(e) => {
            info!("Account update rejected: {}", e);
            Ok(upstream_error_response(
                &e,
                e.display_message(UPDATE_FAILED, UNEXPECTED),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(contact: &str, password: &str) -> EditAccountRequest {
        EditAccountRequest {
            fname: "Ruwan".into(),
            lname: "Jayasinghe".into(),
            contact: contact.into(),
            username: "ruwan".into(),
            password: password.into(),
            experience_years: None,
        }
    }

    #[test]
    fn test_empty_password_is_allowed() {
        assert_eq!(validate_edit(&request("0712345678", "")), Ok(()));
    }

    #[test]
    fn test_contact_checked_first() {
        assert_eq!(
            validate_edit(&request("12345", "weak")),
            Err("CONTACT_ERROR: Must be 10 digits.")
        );
    }

    #[test]
    fn test_weak_new_password() {
        assert_eq!(
            validate_edit(&request("0712345678", "short1!A")),
            Err("SECURITY_ERROR: Pass must be 10+ chars with Mix.")
        );
        assert_eq!(validate_edit(&request("0712345678", "L0nger@Pass")), Ok(()));
    }
}
