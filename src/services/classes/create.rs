use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{ClassService, validate_class_form};
use crate::middlewares::{RequireSession, create_redirect_response};
use crate::models::classes::requests::ClassForm;
use crate::models::classes::responses::ClassFormView;
use crate::models::{ApiResponse, Navigation, paths};
use crate::services::{upstream_error_response, validation_error_response};

pub async fn add_page() -> ActixResult<HttpResponse> {
    let view = ClassFormView::new(ClassForm::default(), paths::ADD_CLASS);
    Ok(HttpResponse::Ok().json(ApiResponse::success(view, "INITIALIZE_MODULE")))
}

pub async fn create_class(
    service: &ClassService,
    request: &HttpRequest,
    form: ClassForm,
) -> ActixResult<HttpResponse> {
    let Some(session) = RequireSession::extract_session(request) else {
        return Ok(create_redirect_response());
    };

    if let Err(e) = validate_class_form(&form) {
        return Ok(validation_error_response(e.message()));
    }

    let client = service.get_client(request);
    match client.classes().add(&session.token, &form).await {
        Ok(()) => {
            info!("Class '{}' created", form.class_name);
            Ok(HttpResponse::Ok().json(
                ApiResponse::success_empty("MODULE_SAVED_SUCCESSFULLY")
                    .navigate(Navigation::after(paths::ACCOUNT, 2000)),
            ))
        }
        Err(e) => {
            info!("Class creation failed: {}", e);
            let offline = format!("CANNOT_CONNECT_TO_PORT_{}", client.class_service_port());
            Ok(upstream_error_response(
                &e,
                e.display_message("SERVER_REJECTED_REQUEST", &offline),
            ))
        }
    }
}
