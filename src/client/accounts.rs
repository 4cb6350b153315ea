use super::{ApiClient, ApiError, ServiceEndpoint, bearer};
use crate::models::auth::requests::{LoginCredentials, SignupPayload};
use crate::models::auth::responses::LoginResponse;
use crate::models::users::entities::Account;
use crate::models::users::requests::AccountUpdate;

/// 学生或教师账号服务
pub struct AccountsApi<'a> {
    client: &'a ApiClient,
    endpoint: &'a ServiceEndpoint,
}

impl<'a> AccountsApi<'a> {
    pub(super) fn new(client: &'a ApiClient, endpoint: &'a ServiceEndpoint) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &ServiceEndpoint {
        self.endpoint
    }

    #[tracing::instrument(
        skip(self, credentials),
        fields(service = self.endpoint.name(), username = %credentials.username)
    )]
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, ApiError> {
        let request = self
            .client
            .http()
            .post(self.endpoint.url("login"))
            .json(credentials);
        self.client.send_json(self.endpoint, request).await
    }

    #[tracing::instrument(
        skip(self, payload),
        fields(service = self.endpoint.name(), username = %payload.username)
    )]
    pub async fn signup(&self, payload: &SignupPayload) -> Result<(), ApiError> {
        let request = self
            .client
            .http()
            .post(self.endpoint.url("signup"))
            .json(payload);
        self.client.send_empty(self.endpoint, request).await
    }

    #[tracing::instrument(skip(self, token), fields(service = self.endpoint.name()))]
    pub async fn get(&self, token: &str, id: i64) -> Result<Account, ApiError> {
        let request = self
            .client
            .http()
            .get(self.endpoint.url(&id.to_string()))
            .header("Authorization", bearer(token));
        self.client.send_json(self.endpoint, request).await
    }

    #[tracing::instrument(
        skip(self, token, record),
        fields(service = self.endpoint.name(), id = record.id)
    )]
    pub async fn update(&self, token: &str, record: &AccountUpdate) -> Result<(), ApiError> {
        let request = self
            .client
            .http()
            .put(self.endpoint.url("update"))
            .header("Authorization", bearer(token))
            .json(record);
        self.client.send_empty(self.endpoint, request).await
    }

    #[tracing::instrument(skip(self, token), fields(service = self.endpoint.name()))]
    pub async fn delete(&self, token: &str, id: i64) -> Result<(), ApiError> {
        let request = self
            .client
            .http()
            .delete(self.endpoint.url(&id.to_string()))
            .header("Authorization", bearer(token));
        self.client.send_empty(self.endpoint, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackendConfig;
    use crate::models::users::entities::UserRole;
    use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
    use serde_json::json;

    async fn start_backend() -> (actix_web::dev::ServerHandle, u16) {
        let server = HttpServer::new(|| {
            App::new()
                .route(
                    "/api/students/login",
                    web::post().to(|body: web::Json<serde_json::Value>| async move {
                        if body["password"] == "Secret@1234" {
                            HttpResponse::Ok().json(json!({ "token": "t-1" }))
                        } else {
                            HttpResponse::Unauthorized().json(json!({ "error": "Bad credentials" }))
                        }
                    }),
                )
                .route(
                    "/api/students/{id}",
                    web::get().to(|req: HttpRequest, path: web::Path<i64>| async move {
                        let auth = req
                            .headers()
                            .get("Authorization")
                            .and_then(|h| h.to_str().ok())
                            .unwrap_or_default()
                            .to_string();
                        if auth != "Bearer t-1" {
                            return HttpResponse::Unauthorized().finish();
                        }
                        HttpResponse::Ok().json(json!({
                            "id": path.into_inner(),
                            "fname": "Kasun",
                            "lname": "Silva",
                            "email": "kasun@example.com",
                            "contact": "0771234567",
                            "username": "kasun"
                        }))
                    }),
                )
                .route(
                    "/api/students/update",
                    web::put().to(|| async { HttpResponse::Ok().body("Updated") }),
                )
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
        let port = server.addrs()[0].port();
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);
        (handle, port)
    }

    fn client_for(port: u16) -> ApiClient {
        ApiClient::new(&BackendConfig {
            student_url: format!("http://127.0.0.1:{port}/api/students"),
            ..BackendConfig::default()
        })
        .unwrap()
    }

    fn credentials(password: &str) -> LoginCredentials {
        LoginCredentials {
            username: "kasun".into(),
            password: password.into(),
        }
    }

    #[actix_web::test]
    async fn test_login_and_fetch() {
        let (handle, port) = start_backend().await;
        let client = client_for(port);
        let accounts = client.accounts(UserRole::Student);

        let login = accounts.login(&credentials("Secret@1234")).await.unwrap();
        assert_eq!(login.token.as_deref(), Some("t-1"));

        let account = accounts.get("t-1", 12).await.unwrap();
        assert_eq!(account.id, 12);
        assert_eq!(account.username, "kasun");

        // 非 JSON 的成功响应体不影响 update
        let record = AccountUpdate {
            id: 12,
            fname: account.fname,
            lname: account.lname,
            email: account.email,
            contact: account.contact,
            username: account.username,
            password: None,
            experience_years: None,
        };
        assert_eq!(accounts.update("t-1", &record).await, Ok(()));

        handle.stop(false).await;
    }

    #[actix_web::test]
    async fn test_rejected_login_carries_message() {
        let (handle, port) = start_backend().await;
        let client = client_for(port);

        let err = client
            .accounts(UserRole::Student)
            .login(&credentials("wrong"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected {
                status: 401,
                message: Some("Bad credentials".into())
            }
        );

        handle.stop(false).await;
    }

    #[actix_web::test]
    async fn test_unreachable_backend() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = client_for(port);
        let err = client
            .accounts(UserRole::Student)
            .get("t-1", 1)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Unreachable {
                service: "student",
                port
            }
        );
    }
}
