use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AuthService;
use crate::client::ApiError;
use crate::models::auth::requests::{LoginCredentials, LoginRequest};
use crate::models::auth::responses::{LoginView, RoleOption};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, Navigation};
use crate::services::{session_context, upstream_error_response, validation_error_response};
use crate::session::Session;
use crate::utils::validate::validate_required;

const LOGIN_FAILED: &str = "Login failed!";
const UNEXPECTED: &str = "Unexpected error occurred.";

pub async fn login_page() -> ActixResult<HttpResponse> {
    let view = LoginView {
        roles: UserRole::all().iter().copied().map(RoleOption::from).collect(),
        default_role: UserRole::Student,
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(view, "USER_LOGIN")))
}

pub async fn handle_login(
    service: &AuthService,
    request: &HttpRequest,
    login_request: LoginRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = validate_required(&[
        ("username", &login_request.username),
        ("password", &login_request.password),
    ]) {
        return Ok(validation_error_response(e.message()));
    }

    let role = login_request.role;
    let credentials = LoginCredentials {
        username: login_request.username,
        password: login_request.password,
    };

    let client = service.get_client(request);
    let token = match client.accounts(role).login(&credentials).await {
        Ok(response) => response
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::Decode("login response carries no token".to_string())),
        Err(e) => Err(e),
    };

    match token {
        Ok(token) => {
            info!("User {} logged in as {}", credentials.username, role);

            let mut session = session_context(request);
            session.write(&Session::new(token, role));

            let mut response = HttpResponse::Ok();
            session.store().apply(&mut response);
            Ok(response.json(
                ApiResponse::success_empty("ACCESS_GRANTED")
                    .navigate(Navigation::now(role.home_path())),
            ))
        }
        Err(e) => {
            info!("Login failed for {}: {}", credentials.username, e);
            Ok(upstream_error_response(
                &e,
                e.display_message(LOGIN_FAILED, UNEXPECTED),
            ))
        }
    }
}
