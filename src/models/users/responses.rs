use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::{Account, UserRole};
use crate::models::common::DialogView;

// 账户详情页
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct AccountView {
    pub title: String,
    pub role: UserRole,
    pub account: Account,
    pub edit_link: String,
    pub delete_dialog: DialogView,
}

// 编辑账户页（预填表单）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct EditAccountView {
    pub role: UserRole,
    pub form: AccountForm,
    pub read_only_fields: Vec<String>,
    pub cancel_link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct AccountForm {
    pub id: i64,
    pub fname: String,
    pub lname: String,
    pub email: String,
    pub contact: String,
    pub username: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub experience_years: Option<i32>,
}

impl From<Account> for AccountForm {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            fname: account.fname,
            lname: account.lname,
            email: account.email,
            contact: account.contact,
            username: account.username,
            // 预填时清空密码
            password: String::new(),
            experience_years: account.experience_years,
        }
    }
}
