use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::lenient;
use crate::models::users::entities::UserRole;

// 用户登录请求（来自页面表单）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginRequest {
    /// 登录身份，默认学生
    #[serde(default = "default_role")]
    pub role: UserRole,
    pub username: String,
    pub password: String,
}

// 用户注册请求（来自页面表单）
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct SignupRequest {
    #[serde(default = "default_role")]
    pub role: UserRole,
    pub fname: String,
    pub lname: String,
    pub email: String,
    pub contact: String,
    pub username: String,
    pub password: String,
    /// 仅教师需要
    #[serde(default, deserialize_with = "lenient::optional_i32")]
    #[ts(optional)]
    pub experience_years: Option<i32>,
}

fn default_role() -> UserRole {
    UserRole::Student
}

// 提交给后端的登录凭据
#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

// 提交给后端的注册数据，学生不带 experienceYears
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupPayload {
    pub fname: String,
    pub lname: String,
    pub email: String,
    pub contact: String,
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<i32>,
}

impl From<SignupRequest> for SignupPayload {
    fn from(request: SignupRequest) -> Self {
        let experience_years = match request.role {
            UserRole::Teacher => request.experience_years,
            UserRole::Student => None,
        };
        Self {
            fname: request.fname,
            lname: request.lname,
            email: request.email,
            contact: request.contact,
            username: request.username,
            password: request.password,
            experience_years,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_payload_drops_experience() {
        let request: SignupRequest = serde_json::from_str(
            r#"{"role": "student", "fname": "A", "lname": "B", "email": "a@b.com",
                "contact": "0712345678", "username": "ab1", "password": "Abcdef123!",
                "experienceYears": "3"}"#,
        )
        .unwrap();
        let payload = serde_json::to_value(SignupPayload::from(request)).unwrap();
        assert!(payload.get("experienceYears").is_none());
        assert_eq!(payload["username"], "ab1");
    }

    #[test]
    fn test_teacher_payload_keeps_experience() {
        let request: SignupRequest = serde_json::from_str(
            r#"{"role": "teacher", "fname": "A", "lname": "B", "email": "a@b.com",
                "contact": "0712345678", "username": "ab1", "password": "Abcdef123!",
                "experienceYears": 8}"#,
        )
        .unwrap();
        let payload = serde_json::to_value(SignupPayload::from(request)).unwrap();
        assert_eq!(payload["experienceYears"], 8);
    }

    #[test]
    fn test_login_role_defaults_to_student() {
        let request: LoginRequest =
            serde_json::from_str(r#"{"username": "ab1", "password": "x"}"#).unwrap();
        assert_eq!(request.role, UserRole::Student);
    }
}
