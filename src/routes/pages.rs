use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::paths;
use crate::services::PageService;

// 懒加载的全局 PAGE_SERVICE 实例
static PAGE_SERVICE: Lazy<PageService> = Lazy::new(PageService::new_lazy);

pub async fn home() -> ActixResult<HttpResponse> {
    PAGE_SERVICE.home().await
}

pub async fn about() -> ActixResult<HttpResponse> {
    PAGE_SERVICE.about().await
}

pub async fn layout(req: HttpRequest) -> ActixResult<HttpResponse> {
    PAGE_SERVICE.layout(&req).await
}

pub async fn external(req: HttpRequest) -> ActixResult<HttpResponse> {
    PAGE_SERVICE.external(&req).await
}

// 配置路由
pub fn configure_page_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(paths::HOME, web::get().to(home))
        .route(paths::ABOUT, web::get().to(about))
        .route("/layout", web::get().to(layout));

    // 其他模块负责的页面
    for path in [
        paths::STUDENT_HOME,
        paths::LEADERBOARD,
        "/ViewSchedule/{id}",
        "/AddSchedule/{id}",
    ] {
        cfg.route(path, web::get().to(external));
    }
}
