pub mod login;
pub mod logout;
pub mod signup;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::client::ApiClient;
use crate::models::auth::requests::{LoginRequest, SignupRequest};

pub struct AuthService;

impl AuthService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub(crate) fn get_client(&self, request: &HttpRequest) -> Arc<ApiClient> {
        super::api_client(request)
    }

    // 登录页
    pub async fn login_page(&self) -> ActixResult<HttpResponse> {
        login::login_page().await
    }

    // 登录
    pub async fn login(
        &self,
        request: &HttpRequest,
        login_request: LoginRequest,
    ) -> ActixResult<HttpResponse> {
        login::handle_login(self, request, login_request).await
    }

    // 注册页
    pub async fn signup_page(&self) -> ActixResult<HttpResponse> {
        signup::signup_page().await
    }

    // 注册
    pub async fn signup(
        &self,
        request: &HttpRequest,
        signup_request: SignupRequest,
    ) -> ActixResult<HttpResponse> {
        signup::handle_signup(self, request, signup_request).await
    }

    // 退出登录
    pub async fn logout(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        logout::handle_logout(request).await
    }
}
