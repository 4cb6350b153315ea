use actix_web::http::StatusCode;
use serde_json::Value;
use std::fmt;

use crate::errors::PortalError;

/// 后端调用失败的三种情况
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 后端返回了错误状态码
    Rejected { status: u16, message: Option<String> },
    /// 请求没有得到任何响应
    Unreachable { service: &'static str, port: u16 },
    /// 2xx 响应体无法解析
    Decode(String),
}

impl ApiError {
    /// 页面上展示的提示文字
    ///
    /// 后端给出 `message`/`error` 时优先使用，否则退回页面自己的提示；
    /// 没有得到可用响应时使用 `unexpected`。
    pub fn display_message(&self, fallback: &str, unexpected: &str) -> String {
        match self {
            ApiError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Rejected { message: None, .. } => fallback.to_string(),
            ApiError::Unreachable { .. } | ApiError::Decode(_) => unexpected.to_string(),
        }
    }

    /// 转发给浏览器的状态码：后端的 4xx/5xx 原样返回，其余视为网关错误
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Rejected { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            ApiError::Unreachable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Decode(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Rejected { status, message } => write!(
                f,
                "backend rejected request with status {status}: {}",
                message.as_deref().unwrap_or("<no message>")
            ),
            ApiError::Unreachable { service, port } => {
                write!(f, "{service} service on port {port} is unreachable")
            }
            ApiError::Decode(e) => write!(f, "backend response could not be decoded: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for PortalError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Rejected { .. } => PortalError::upstream_rejected(err.to_string()),
            ApiError::Unreachable { .. } => PortalError::backend_unreachable(err.to_string()),
            ApiError::Decode(_) => PortalError::serialization(err.to_string()),
        }
    }
}

/// 从错误响应体中取出 `message`，其次 `error`
pub fn extract_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    ["message", "error"].iter().find_map(|field| {
        value
            .get(field)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}
