//! 后端服务客户端
//!
//! 门户通过一个共享的 `reqwest::Client` 调用四个后端服务：
//! 教师账号、学生账号、课程、课程时间表。所有请求都以 `Authorization: Bearer <token>`
//! 携带会话中的令牌（登录与注册除外）。

pub mod accounts;
pub mod classes;
pub mod error;
pub mod schedules;

use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::BackendConfig;
use crate::errors::{PortalError, Result};
use crate::models::users::entities::UserRole;

pub use accounts::AccountsApi;
pub use classes::ClassesApi;
pub use error::{ApiError, extract_message};
pub use schedules::SchedulesApi;

/// 单个后端服务的基础地址
#[derive(Debug, Clone)]
pub struct ServiceEndpoint {
    name: &'static str,
    base: Arc<str>,
    port: u16,
}

impl ServiceEndpoint {
    pub fn parse(name: &'static str, raw: &str) -> Result<Self> {
        let url = Url::parse(raw.trim()).map_err(|e| {
            PortalError::configuration(format!("Invalid {name} service URL '{raw}': {e}"))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(PortalError::configuration(format!(
                "Unsupported scheme for {name} service URL '{raw}'"
            )));
        }
        let port = url.port_or_known_default().ok_or_else(|| {
            PortalError::configuration(format!("Cannot determine port of {name} service URL"))
        })?;

        Ok(Self {
            name,
            base: Arc::from(url.as_str().trim_end_matches('/')),
            port,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    fn unreachable(&self) -> ApiError {
        ApiError::Unreachable {
            service: self.name,
            port: self.port,
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    teacher: ServiceEndpoint,
    student: ServiceEndpoint,
    class: ServiceEndpoint,
    schedule: ServiceEndpoint,
}

impl ApiClient {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| PortalError::configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            teacher: ServiceEndpoint::parse("teacher", &config.teacher_url)?,
            student: ServiceEndpoint::parse("student", &config.student_url)?,
            class: ServiceEndpoint::parse("class", &config.class_url)?,
            schedule: ServiceEndpoint::parse("schedule", &config.schedule_url)?,
        })
    }

    /// 按角色选择账号服务
    pub fn accounts(&self, role: UserRole) -> AccountsApi<'_> {
        let endpoint = match role {
            UserRole::Teacher => &self.teacher,
            UserRole::Student => &self.student,
        };
        AccountsApi::new(self, endpoint)
    }

    pub fn classes(&self) -> ClassesApi<'_> {
        ClassesApi::new(self, &self.class)
    }

    pub fn schedules(&self) -> SchedulesApi<'_> {
        SchedulesApi::new(self, &self.schedule)
    }

    /// 课程服务端口，用于连接失败提示
    pub fn class_service_port(&self) -> u16 {
        self.class.port
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// 发送请求并把 2xx 响应体解析为 `T`
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        endpoint: &ServiceEndpoint,
        request: RequestBuilder,
    ) -> std::result::Result<T, ApiError> {
        let body = self.send(endpoint, request).await?;
        serde_json::from_slice(&body).map_err(|e| {
            warn!("Failed to decode {} service response: {}", endpoint.name, e);
            ApiError::Decode(e.to_string())
        })
    }

    /// 发送请求，只关心是否成功
    pub(crate) async fn send_empty(
        &self,
        endpoint: &ServiceEndpoint,
        request: RequestBuilder,
    ) -> std::result::Result<(), ApiError> {
        self.send(endpoint, request).await.map(|_| ())
    }

    async fn send(
        &self,
        endpoint: &ServiceEndpoint,
        request: RequestBuilder,
    ) -> std::result::Result<Vec<u8>, ApiError> {
        let response = request.send().await.map_err(|e| {
            warn!("{} service request failed: {}", endpoint.name, e);
            endpoint.unreachable()
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            warn!("Failed to read {} service response: {}", endpoint.name, e);
            endpoint.unreachable()
        })?;

        if !status.is_success() {
            let message = extract_message(&body);
            debug!(
                "{} service rejected request with status {}: {:?}",
                endpoint.name, status, message
            );
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        Ok(body.to_vec())
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_join() {
        let endpoint =
            ServiceEndpoint::parse("class", "http://localhost:8084/api/classes/").unwrap();
        assert_eq!(
            endpoint.url("my-classes"),
            "http://localhost:8084/api/classes/my-classes"
        );
        assert_eq!(endpoint.url("/7"), "http://localhost:8084/api/classes/7");
        assert_eq!(endpoint.port(), 8084);
    }

    #[test]
    fn test_endpoint_default_port() {
        let endpoint =
            ServiceEndpoint::parse("teacher", "https://api.example.com/teachers").unwrap();
        assert_eq!(endpoint.port(), 443);
    }

    #[test]
    fn test_invalid_endpoint() {
        let err = ServiceEndpoint::parse("student", "not a url").unwrap_err();
        assert_eq!(err.code(), "E007");
        assert!(ServiceEndpoint::parse("student", "ftp://host/api").is_err());
    }

    #[test]
    fn test_accounts_pick_role_service() {
        let client = ApiClient::new(&BackendConfig::default()).unwrap();
        assert_eq!(client.accounts(UserRole::Teacher).endpoint().port(), 8082);
        assert_eq!(client.accounts(UserRole::Student).endpoint().port(), 8083);
        assert_eq!(client.class_service_port(), 8084);
    }
}
