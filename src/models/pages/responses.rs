use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::users::entities::UserRole;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/page.ts")]
pub struct NavLink {
    pub label: String,
    pub to: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            to: to.into(),
        }
    }
}

// 导航栏，随登录状态和身份变化
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/page.ts")]
pub struct NavbarView {
    pub brand: String,
    pub home_path: String,
    pub logged_in: bool,
    pub role: Option<UserRole>,
    /// 中间的页面链接
    pub links: Vec<NavLink>,
    /// 右侧的账户操作（登录/注册 或 我的账户/退出）
    pub actions: Vec<NavLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/page.ts")]
pub struct FooterView {
    pub version: String,
    pub links: Vec<NavLink>,
    pub status: Vec<NavLink>,
    pub copyright: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/page.ts")]
pub struct LayoutView {
    pub navbar: NavbarView,
    pub footer: FooterView,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/page.ts")]
pub struct ContentSection {
    pub title: String,
    pub body: String,
    pub items: Vec<String>,
}

// 首页与关于页共用的静态内容结构
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/page.ts")]
pub struct ContentPage {
    pub headline: String,
    pub tagline: String,
    pub sections: Vec<ContentSection>,
    pub calls_to_action: Vec<NavLink>,
}
