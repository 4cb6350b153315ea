use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::lenient;

// 编辑账户请求（来自页面表单）
//
// 邮箱不可修改，表单中即使带上 email 也会被忽略；
// 密码留空表示不修改。
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct EditAccountRequest {
    pub fname: String,
    pub lname: String,
    pub contact: String,
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, deserialize_with = "lenient::optional_i32")]
    #[ts(optional)]
    pub experience_years: Option<i32>,
}

// 提交给后端的完整账户记录（PUT /update）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdate {
    pub id: i64,
    pub fname: String,
    pub lname: String,
    pub email: String,
    pub contact: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<i32>,
}
