pub mod about;
pub mod home;
pub mod layout;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};

pub struct PageService;

impl PageService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub async fn home(&self) -> ActixResult<HttpResponse> {
        home::home_page().await
    }

    pub async fn about(&self) -> ActixResult<HttpResponse> {
        about::about_page().await
    }

    // 导航栏与页脚，随会话变化
    pub async fn layout(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        layout::layout(request).await
    }

    /// 由其他模块提供的页面（学生首页、排行榜、课程时间）
    pub async fn external(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        Ok(HttpResponse::NotImplemented().json(ApiResponse::error_empty(
            ErrorCode::NotImplemented,
            format!("{} is served by another module", request.path()),
        )))
    }
}

fn items(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
