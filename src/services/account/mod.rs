pub mod delete;
pub mod edit;
pub mod view;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::cache::ConfirmStore;
use crate::client::ApiClient;
use crate::models::users::requests::EditAccountRequest;

pub struct AccountService;

impl AccountService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub(crate) fn get_client(&self, request: &HttpRequest) -> Arc<ApiClient> {
        super::api_client(request)
    }

    pub(crate) fn get_confirmations(&self, request: &HttpRequest) -> Arc<ConfirmStore> {
        super::confirm_store(request)
    }

    // 账户详情
    pub async fn view_account(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        view::view_account(self, request).await
    }

    // 编辑页（预填）
    pub async fn edit_page(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        edit::edit_page(self, request).await
    }

    // 提交编辑
    pub async fn update_account(
        &self,
        request: &HttpRequest,
        edit_request: EditAccountRequest,
    ) -> ActixResult<HttpResponse> {
        edit::update_account(self, request, edit_request).await
    }

    // 打开删除确认
    pub async fn request_delete(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::request_delete(self, request).await
    }

    // 取消删除
    pub async fn abort_delete(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::abort_delete(self, request).await
    }

    // 确认删除
    pub async fn confirm_delete(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::confirm_delete(self, request).await
    }
}
