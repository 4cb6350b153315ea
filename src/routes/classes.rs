use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{RequireRole, RequireSession};
use crate::models::classes::requests::ClassForm;
use crate::models::paths;
use crate::models::users::entities::UserRole;
use crate::services::ClassService;

// 懒加载的全局 CLASS_SERVICE 实例
static CLASS_SERVICE: Lazy<ClassService> = Lazy::new(ClassService::new_lazy);

// HTTP处理程序
pub async fn teacher_home(req: HttpRequest) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.teacher_home(&req).await
}

pub async fn add_page() -> ActixResult<HttpResponse> {
    CLASS_SERVICE.add_page().await
}

pub async fn create_class(
    req: HttpRequest,
    form: web::Json<ClassForm>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.create_class(&req, form.into_inner()).await
}

pub async fn view_class(req: HttpRequest, class_id: web::Path<i64>) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.view_class(&req, class_id.into_inner()).await
}

pub async fn edit_page(req: HttpRequest, class_id: web::Path<i64>) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.edit_page(&req, class_id.into_inner()).await
}

pub async fn update_class(
    req: HttpRequest,
    class_id: web::Path<i64>,
    form: web::Json<ClassForm>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .update_class(&req, class_id.into_inner(), form.into_inner())
        .await
}

pub async fn request_delete(
    req: HttpRequest,
    class_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .request_delete(&req, class_id.into_inner())
        .await
}

pub async fn abort_delete(req: HttpRequest, class_id: web::Path<i64>) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.abort_delete(&req, class_id.into_inner()).await
}

pub async fn confirm_delete(
    req: HttpRequest,
    class_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .confirm_delete(&req, class_id.into_inner())
        .await
}

// 配置路由，教师专用：后注册的 RequireSession 先执行，再校验角色
pub fn configure_classes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(paths::TEACHER_HOME)
            .wrap(RequireRole::new(UserRole::Teacher))
            .wrap(RequireSession)
            .route(web::get().to(teacher_home)),
    )
    .service(
        web::resource(paths::ADD_CLASS)
            .wrap(RequireRole::new(UserRole::Teacher))
            .wrap(RequireSession)
            .route(web::get().to(add_page))
            .route(web::post().to(create_class)),
    )
    .service(
        web::resource("/ViewClass/{class_id}")
            .wrap(RequireRole::new(UserRole::Teacher))
            .wrap(RequireSession)
            .route(web::get().to(view_class)),
    )
    .service(
        web::resource("/ViewClass/{class_id}/delete")
            .wrap(RequireRole::new(UserRole::Teacher))
            .wrap(RequireSession)
            .route(web::post().to(request_delete)),
    )
    .service(
        web::resource("/ViewClass/{class_id}/delete/abort")
            .wrap(RequireRole::new(UserRole::Teacher))
            .wrap(RequireSession)
            .route(web::post().to(abort_delete)),
    )
    .service(
        web::resource("/ViewClass/{class_id}/delete/confirm")
            .wrap(RequireRole::new(UserRole::Teacher))
            .wrap(RequireSession)
            .route(web::post().to(confirm_delete)),
    )
    .service(
        web::resource("/EditClass/{class_id}")
            .wrap(RequireRole::new(UserRole::Teacher))
            .wrap(RequireSession)
            .route(web::get().to(edit_page))
            .route(web::post().to(update_class)),
    );
}
