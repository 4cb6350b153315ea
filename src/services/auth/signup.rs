use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AuthService;
use crate::models::auth::requests::{SignupPayload, SignupRequest};
use crate::models::auth::responses::{RoleOption, SignupView};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, Navigation, paths};
use crate::services::{upstream_error_response, validation_error_response};
use crate::utils::validate::{
    validate_contact, validate_experience_years, validate_password, validate_required,
};

const SIGNUP_FAILED: &str = "Signup failed!";
const UNEXPECTED: &str = "An unexpected error occurred.";

const COMMON_FIELDS: [&str; 6] = ["fname", "lname", "email", "contact", "username", "password"];

pub async fn signup_page() -> ActixResult<HttpResponse> {
    let student_fields: Vec<String> = COMMON_FIELDS.iter().map(|f| f.to_string()).collect();
    let mut teacher_fields = student_fields.clone();
    teacher_fields.push("experienceYears".to_string());

    let view = SignupView {
        roles: UserRole::all().iter().copied().map(RoleOption::from).collect(),
        default_role: UserRole::Student,
        student_fields,
        teacher_fields,
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(view, "CREATE_ACCOUNT")))
}

/// 依次检查必填、电话、密码、教龄，返回第一条错误
fn validate_signup(request: &SignupRequest) -> Result<(), String> {
    validate_required(&[
        ("fname", &request.fname),
        ("lname", &request.lname),
        ("email", &request.email),
        ("contact", &request.contact),
        ("username", &request.username),
        ("password", &request.password),
    ])
    .map_err(|e| e.message().to_string())?;

    if !validate_contact(&request.contact) {
        return Err("Contact number must be exactly 10 digits.".to_string());
    }

    if !validate_password(&request.password) {
        return Err(
            "Password must include uppercase, lowercase, number, symbol, and be 10+ characters."
                .to_string(),
        );
    }

    if request.role == UserRole::Teacher {
        match request.experience_years {
            None => return Err("experienceYears is required.".to_string()),
            Some(years) if !validate_experience_years(years) => {
                return Err("Experience years cannot be negative.".to_string());
            }
            Some(_) => {}
        }
    }

    Ok(())
}

pub async fn handle_signup(
    service: &AuthService,
    request: &HttpRequest,
    signup_request: SignupRequest,
) -> ActixResult<HttpResponse> {
    if let Err(message) = validate_signup(&signup_request) {
        return Ok(validation_error_response(message));
    }

    let role = signup_request.role;
    let payload = SignupPayload::from(signup_request);

    let client = service.get_client(request);
    match client.accounts(role).signup(&payload).await {
        Ok(()) => {
            info!("New {} account registered: {}", role, payload.username);
            Ok(HttpResponse::Ok().json(
                ApiResponse::success_empty("Signup successful! Redirecting to login...")
                    .navigate(Navigation::after(paths::LOGIN_AFTER_SIGNUP, 2000)),
            ))
        }
        Err(e) => {
            info!("Signup failed for {}: {}", payload.username, e);
            Ok(upstream_error_response(
                &e,
                e.display_message(SIGNUP_FAILED, UNEXPECTED),
            ))
        }
    }
}
