use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::users::entities::UserRole;

// 后端登录响应
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default, alias = "accessToken")]
    pub token: Option<String>,
}

// 身份下拉选项
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct RoleOption {
    pub value: UserRole,
    pub label: String,
}

impl From<UserRole> for RoleOption {
    fn from(role: UserRole) -> Self {
        Self {
            value: role,
            label: role.unit_label().to_string(),
        }
    }
}

// 登录页
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginView {
    pub roles: Vec<RoleOption>,
    pub default_role: UserRole,
}

// 注册页，字段按身份区分
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct SignupView {
    pub roles: Vec<RoleOption>,
    pub default_role: UserRole,
    pub student_fields: Vec<String>,
    pub teacher_fields: Vec<String>,
}
