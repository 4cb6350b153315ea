use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, Navigation, paths};
use crate::services::session_context;

/// 清除会话 Cookie 并回到登录页
pub async fn handle_logout(request: &HttpRequest) -> ActixResult<HttpResponse> {
    let mut session = session_context(request);
    session.clear();

    let mut response = HttpResponse::Ok();
    session.store().apply(&mut response);
    Ok(response.json(
        ApiResponse::success_empty("SESSION_TERMINATED").navigate(Navigation::now(paths::LOGIN)),
    ))
}
