use super::{ApiClient, ApiError, ServiceEndpoint, bearer};
use crate::models::schedules::entities::Schedule;

/// 课程时间表服务（只读）
pub struct SchedulesApi<'a> {
    client: &'a ApiClient,
    endpoint: &'a ServiceEndpoint,
}

impl<'a> SchedulesApi<'a> {
    pub(super) fn new(client: &'a ApiClient, endpoint: &'a ServiceEndpoint) -> Self {
        Self { client, endpoint }
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn list_for_class(
        &self,
        token: &str,
        class_id: i64,
    ) -> Result<Vec<Schedule>, ApiError> {
        let request = self
            .client
            .http()
            .get(self.endpoint.url(&format!("list/{class_id}")))
            .header("Authorization", bearer(token));
        self.client.send_json(self.endpoint, request).await
    }
}
