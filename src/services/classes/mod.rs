pub mod create;
pub mod delete;
pub mod edit;
pub mod list;
pub mod view;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::cache::ConfirmStore;
use crate::client::ApiClient;
use crate::models::classes::requests::ClassForm;
use crate::utils::validate::{validate_price, validate_required};

pub struct ClassService;

impl ClassService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub(crate) fn get_client(&self, request: &HttpRequest) -> Arc<ApiClient> {
        super::api_client(request)
    }

    pub(crate) fn get_confirmations(&self, request: &HttpRequest) -> Arc<ConfirmStore> {
        super::confirm_store(request)
    }

    // 教师首页：我的班级
    pub async fn teacher_home(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::teacher_home(self, request).await
    }

    // 新增班级页
    pub async fn add_page(&self) -> ActixResult<HttpResponse> {
        create::add_page().await
    }

    pub async fn create_class(
        &self,
        request: &HttpRequest,
        form: ClassForm,
    ) -> ActixResult<HttpResponse> {
        create::create_class(self, request, form).await
    }

    // 班级详情（含上课时间）
    pub async fn view_class(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        view::view_class(self, request, class_id).await
    }

    pub async fn edit_page(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        edit::edit_page(self, request, class_id).await
    }

    pub async fn update_class(
        &self,
        request: &HttpRequest,
        class_id: i64,
        form: ClassForm,
    ) -> ActixResult<HttpResponse> {
        edit::update_class(self, request, class_id, form).await
    }

    pub async fn request_delete(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::request_delete(self, request, class_id).await
    }

    pub async fn abort_delete(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::abort_delete(self, request, class_id).await
    }

    pub async fn confirm_delete(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::confirm_delete(self, request, class_id).await
    }
}

/// 新增与编辑共用的表单校验
pub(crate) fn validate_class_form(form: &ClassForm) -> crate::errors::Result<()> {
    validate_required(&form.required_fields())?;
    if !validate_price(form.price) {
        return Err(crate::errors::PortalError::validation(
            "Price must be a non-negative number.",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::classes::entities::DeliveryMode;

    fn form() -> ClassForm {
        ClassForm {
            class_name: "Physics Theory".into(),
            description: "2026 A/L theory".into(),
            subject: "Physics".into(),
            grade: "Grade 13".into(),
            language: "Sinhala".into(),
            mode: DeliveryMode::Online,
            district: "Kandy".into(),
            town: "Peradeniya".into(),
            price: 3000.0,
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(validate_class_form(&form()).is_ok());
    }

    #[test]
    fn test_blank_field() {
        let mut f = form();
        f.town = " ".into();
        assert_eq!(
            validate_class_form(&f).unwrap_err().message(),
            "town is required."
        );
    }

    #[test]
    fn test_negative_price() {
        let mut f = form();
        f.price = -10.0;
        assert!(validate_class_form(&f).is_err());
        f.price = 0.0;
        assert!(validate_class_form(&f).is_ok());
    }
}
