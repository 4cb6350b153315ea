pub mod account;

pub mod auth;

pub mod classes;

pub mod pages;

pub use account::configure_account_routes;
pub use auth::configure_auth_routes;
pub use classes::configure_classes_routes;
pub use pages::configure_page_routes;

use actix_web::web;

/// 注册全部页面路由
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_auth_routes) // 登录、注册、退出
        .configure(configure_account_routes) // 账户页面
        .configure(configure_classes_routes) // 教师班级页面
        .configure(configure_page_routes); // 公共页面
}
