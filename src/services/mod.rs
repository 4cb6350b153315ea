//! 页面服务
//!
//! 每个页面的 GET 返回视图模型，POST 处理表单或操作。后端错误一律转成带提示文字的响应，
//! 不会让请求以 500 结束。

pub mod account;
pub mod auth;
pub mod classes;
pub mod pages;

use actix_web::{HttpRequest, HttpResponse, HttpResponseBuilder, web};
use std::sync::Arc;

use crate::cache::{ConfirmError, ConfirmStore};
use crate::client::{ApiClient, ApiError};
use crate::config::AppConfig;
use crate::errors::PortalError;
use crate::models::{ApiResponse, ErrorCode, Navigation, paths};
use crate::session::{CookieSessionStore, SessionContext};

pub use account::AccountService;
pub use auth::AuthService;
pub use classes::ClassService;
pub use pages::PageService;

pub(crate) fn api_client(request: &HttpRequest) -> Arc<ApiClient> {
    request
        .app_data::<web::Data<ApiClient>>()
        .expect("ApiClient not found in app data")
        .clone()
        .into_inner()
}

pub(crate) fn confirm_store(request: &HttpRequest) -> Arc<ConfirmStore> {
    request
        .app_data::<web::Data<ConfirmStore>>()
        .expect("ConfirmStore not found in app data")
        .clone()
        .into_inner()
}

/// 以请求 Cookie 为基础的会话上下文，写入的变更需通过 `apply` 带回响应
pub(crate) fn session_context(request: &HttpRequest) -> SessionContext<CookieSessionStore> {
    SessionContext::new(CookieSessionStore::from_request(
        request,
        &AppConfig::get().session,
    ))
}

/// 本地校验失败，不会发出后端请求
pub(crate) fn validation_error_response(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::from_error(&PortalError::validation(message)))
}

pub(crate) fn upstream_error_code(err: &ApiError) -> ErrorCode {
    match err {
        ApiError::Unreachable { .. } => ErrorCode::BackendUnreachable,
        ApiError::Rejected { status: 404, .. } => ErrorCode::NotFound,
        ApiError::Rejected { .. } | ApiError::Decode(_) => ErrorCode::UpstreamRejected,
    }
}

/// 后端调用失败，带页面提示文字
pub(crate) fn upstream_error_response(err: &ApiError, message: impl Into<String>) -> HttpResponse {
    HttpResponseBuilder::new(err.status_code())
        .json(ApiResponse::error_empty(upstream_error_code(err), message))
}

/// 会话中的令牌无法解析出用户 ID
pub(crate) fn session_invalid_response() -> HttpResponse {
    HttpResponse::Unauthorized().json(
        ApiResponse::from_error(&PortalError::session_invalid(
            "SESSION_INVALID: Please re-login.",
        ))
        .navigate(Navigation::now(paths::LOGIN)),
    )
}

pub(crate) fn confirm_error_response(err: ConfirmError) -> HttpResponse {
    let code = match err {
        ConfirmError::NotPending => ErrorCode::ConfirmationRequired,
        ConfirmError::InFlight => ErrorCode::ActionInFlight,
    };
    HttpResponse::Conflict().json(ApiResponse::error_empty(code, err.to_string()))
}
