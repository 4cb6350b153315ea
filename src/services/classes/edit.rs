use actix_web::{HttpRequest, HttpResponse, HttpResponseBuilder, Result as ActixResult};
use tracing::info;

use super::{ClassService, validate_class_form};
use crate::middlewares::{RequireSession, create_redirect_response};
use crate::models::classes::requests::ClassForm;
use crate::models::classes::responses::ClassFormView;
use crate::models::{ApiResponse, Navigation, paths};
use crate::services::{upstream_error_code, validation_error_response};

pub async fn edit_page(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let Some(session) = RequireSession::extract_session(request) else {
        return Ok(create_redirect_response());
    };

    let client = service.get_client(request);
    match client.classes().get(&session.token, class_id).await {
        Ok(class) => {
            let view = ClassFormView::new(ClassForm::from(class), paths::edit_class(class_id));
            Ok(HttpResponse::Ok().json(ApiResponse::success(view, "RECONFIGURE_MODULE")))
        }
        Err(e) => {
            info!("Failed to load class {} for editing: {}", class_id, e);
            Ok(HttpResponseBuilder::new(e.status_code()).json(ApiResponse::error_empty(
                upstream_error_code(&e),
                "ERROR: DATA_SYNC_FAILED",
            )))
        }
    }
}

pub async fn update_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    form: ClassForm,
) -> ActixResult<HttpResponse> {
    let Some(session) = RequireSession::extract_session(request) else {
        return Ok(create_redirect_response());
    };

    if let Err(e) = validate_class_form(&form) {
        return Ok(validation_error_response(e.message()));
    }

    let client = service.get_client(request);
    match client.classes().update(&session.token, class_id, &form).await {
        Ok(()) => {
            info!("Class {} updated", class_id);
            Ok(HttpResponse::Ok().json(
                ApiResponse::success_empty("SUCCESS: MODULE_RECONFIGURED")
                    .navigate(Navigation::after(paths::view_class(class_id), 1500)),
            ))
        }
        Err(e) => {
            info!("Class {} update rejected: {}", class_id, e);
            Ok(HttpResponseBuilder::new(e.status_code()).json(ApiResponse::error_empty(
                upstream_error_code(&e),
                "ERROR: UPDATE_SEQUENCE_ABORTED",
            )))
        }
    }
}
