use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::auth::requests::{LoginRequest, SignupRequest};
use crate::models::paths;
use crate::services::AuthService;

// 懒加载的全局 AUTH_SERVICE 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

// HTTP处理程序
pub async fn login_page() -> ActixResult<HttpResponse> {
    AUTH_SERVICE.login_page().await
}

pub async fn login(
    req: HttpRequest,
    login_request: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.login(&req, login_request.into_inner()).await
}

pub async fn signup_page() -> ActixResult<HttpResponse> {
    AUTH_SERVICE.signup_page().await
}

pub async fn signup(
    req: HttpRequest,
    signup_request: web::Json<SignupRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.signup(&req, signup_request.into_inner()).await
}

pub async fn logout(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.logout(&req).await
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    // `/Login` 是注册成功后跳转使用的写法
    for path in [paths::LOGIN, paths::LOGIN_AFTER_SIGNUP] {
        cfg.service(
            web::resource(path)
                .route(web::get().to(login_page))
                .route(web::post().to(login)),
        );
    }
    cfg.service(
        web::resource(paths::SIGNUP)
            .route(web::get().to(signup_page))
            .route(web::post().to(signup)),
    )
    .service(web::resource(paths::LOGOUT).route(web::post().to(logout)));
}
