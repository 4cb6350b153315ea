use actix_web::{
    HttpRequest, HttpResponse,
    error::{InternalError, JsonPayloadError, QueryPayloadError},
};
use tracing::info;

use crate::models::{ApiResponse, ErrorCode};

fn bad_request(detail: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, detail))
}

/// 表单 JSON 解析失败
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let detail = format!("Invalid form data: {err}");
    info!("{} {}: {}", req.method(), req.path(), detail);
    InternalError::from_response(err, bad_request(detail)).into()
}

/// 查询参数解析失败
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    let detail = format!("Invalid query parameters: {err}");
    info!("{} {}: {}", req.method(), req.path(), detail);
    InternalError::from_response(err, bad_request(detail)).into()
}
