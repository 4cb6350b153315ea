use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 客户端导航指令
///
/// 前端收到后在 `delay_ms` 毫秒后跳转到 `to`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct Navigation {
    pub to: String,
    pub delay_ms: u64,
}

impl Navigation {
    pub fn now(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            delay_ms: 0,
        }
    }

    pub fn after(to: impl Into<String>, delay_ms: u64) -> Self {
        Self {
            to: to.into(),
            delay_ms,
        }
    }
}

/// 页面路由
pub mod paths {
    pub const HOME: &str = "/";
    pub const ABOUT: &str = "/About";
    pub const LOGIN: &str = "/login";
    pub const LOGOUT: &str = "/logout";
    // 注册成功后跳转使用的大写形式，与 LOGIN 指向同一页面
    pub const LOGIN_AFTER_SIGNUP: &str = "/Login";
    pub const SIGNUP: &str = "/signup";
    pub const ACCOUNT: &str = "/account";
    pub const EDIT_ACCOUNT: &str = "/edit";
    pub const TEACHER_HOME: &str = "/TeacherHome";
    pub const STUDENT_HOME: &str = "/StudentHome";
    pub const LEADERBOARD: &str = "/LeaderBoard";
    pub const ADD_CLASS: &str = "/AddClass";

    pub fn view_class(id: i64) -> String {
        format!("/ViewClass/{id}")
    }

    pub fn edit_class(id: i64) -> String {
        format!("/EditClass/{id}")
    }

    pub fn view_schedule(id: i64) -> String {
        format!("/ViewSchedule/{id}")
    }

    pub fn add_schedule(class_id: i64) -> String {
        format!("/AddSchedule/{class_id}")
    }
}
