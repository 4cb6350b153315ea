use super::{ApiClient, ApiError, ServiceEndpoint, bearer};
use crate::models::classes::entities::Class;
use crate::models::classes::requests::ClassForm;

/// 课程服务
pub struct ClassesApi<'a> {
    client: &'a ApiClient,
    endpoint: &'a ServiceEndpoint,
}

impl<'a> ClassesApi<'a> {
    pub(super) fn new(client: &'a ApiClient, endpoint: &'a ServiceEndpoint) -> Self {
        Self { client, endpoint }
    }

    #[tracing::instrument(skip(self, token, form), fields(class_name = %form.class_name))]
    pub async fn add(&self, token: &str, form: &ClassForm) -> Result<(), ApiError> {
        let request = self
            .client
            .http()
            .post(self.endpoint.url("add"))
            .header("Authorization", bearer(token))
            .json(form);
        self.client.send_empty(self.endpoint, request).await
    }

    /// 当前教师名下的课程
    #[tracing::instrument(skip(self, token))]
    pub async fn list_mine(&self, token: &str) -> Result<Vec<Class>, ApiError> {
        let request = self
            .client
            .http()
            .get(self.endpoint.url("my-classes"))
            .header("Authorization", bearer(token));
        self.client.send_json(self.endpoint, request).await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn get(&self, token: &str, id: i64) -> Result<Class, ApiError> {
        let request = self
            .client
            .http()
            .get(self.endpoint.url(&id.to_string()))
            .header("Authorization", bearer(token));
        self.client.send_json(self.endpoint, request).await
    }

    #[tracing::instrument(skip(self, token, form))]
    pub async fn update(&self, token: &str, id: i64, form: &ClassForm) -> Result<(), ApiError> {
        let request = self
            .client
            .http()
            .put(self.endpoint.url(&format!("update/{id}")))
            .header("Authorization", bearer(token))
            .json(form);
        self.client.send_empty(self.endpoint, request).await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn delete(&self, token: &str, id: i64) -> Result<(), ApiError> {
        let request = self
            .client
            .http()
            .delete(self.endpoint.url(&format!("delete/{id}")))
            .header("Authorization", bearer(token));
        self.client.send_empty(self.endpoint, request).await
    }
}
