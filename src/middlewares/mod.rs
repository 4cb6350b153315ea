pub mod require_role;
pub mod require_session;

use actix_web::{HttpResponse, http::header::LOCATION};

use crate::models::paths;

pub use require_role::RequireRole;
pub use require_session::RequireSession;

// 辅助函数：重定向到登录页
pub fn create_redirect_response() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, paths::LOGIN))
        .finish()
}
