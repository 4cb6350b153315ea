use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::RequireSession;
use crate::models::paths;
use crate::models::users::requests::EditAccountRequest;
use crate::services::AccountService;

// 懒加载的全局 ACCOUNT_SERVICE 实例
static ACCOUNT_SERVICE: Lazy<AccountService> = Lazy::new(AccountService::new_lazy);

pub async fn view_account(req: HttpRequest) -> ActixResult<HttpResponse> {
    ACCOUNT_SERVICE.view_account(&req).await
}

pub async fn edit_page(req: HttpRequest) -> ActixResult<HttpResponse> {
    ACCOUNT_SERVICE.edit_page(&req).await
}

pub async fn update_account(
    req: HttpRequest,
    edit_request: web::Json<EditAccountRequest>,
) -> ActixResult<HttpResponse> {
    ACCOUNT_SERVICE
        .update_account(&req, edit_request.into_inner())
        .await
}

pub async fn request_delete(req: HttpRequest) -> ActixResult<HttpResponse> {
    ACCOUNT_SERVICE.request_delete(&req).await
}

pub async fn abort_delete(req: HttpRequest) -> ActixResult<HttpResponse> {
    ACCOUNT_SERVICE.abort_delete(&req).await
}

pub async fn confirm_delete(req: HttpRequest) -> ActixResult<HttpResponse> {
    ACCOUNT_SERVICE.confirm_delete(&req).await
}

// 配置路由，所有账户页面都需要登录
pub fn configure_account_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(paths::ACCOUNT)
            .wrap(RequireSession)
            .route(web::get().to(view_account)),
    )
    .service(
        web::resource(paths::EDIT_ACCOUNT)
            .wrap(RequireSession)
            .route(web::get().to(edit_page))
            .route(web::post().to(update_account)),
    )
    .service(
        web::resource("/account/delete")
            .wrap(RequireSession)
            .route(web::post().to(request_delete)),
    )
    .service(
        web::resource("/account/delete/abort")
            .wrap(RequireSession)
            .route(web::post().to(abort_delete)),
    )
    .service(
        web::resource("/account/delete/confirm")
            .wrap(RequireSession)
            .route(web::post().to(confirm_delete)),
    );
}
