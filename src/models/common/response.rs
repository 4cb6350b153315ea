use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{ErrorCode, Navigation};
use crate::cache::DialogState;
use crate::errors::PortalError;

// 统一的页面响应结构
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct ApiResponse<T: TS> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigate: Option<Navigation>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T: TS> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: Some(data),
            navigate: None,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error(code: ErrorCode, data: T, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data: Some(data),
            navigate: None,
            timestamp: chrono::Utc::now(),
        }
    }

    /// 附加导航指令
    pub fn navigate(mut self, navigation: Navigation) -> Self {
        self.navigate = Some(navigation);
        self
    }
}

impl ApiResponse<()> {
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: None,
            navigate: None,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error_empty(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data: None,
            navigate: None,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn from_error(err: &PortalError) -> Self {
        Self::error_empty(ErrorCode::from(err), err.message())
    }
}

// 删除确认弹窗
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct DialogView {
    pub state: DialogState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

impl DialogView {
    pub fn new(state: DialogState, prompt: impl Into<String>) -> Self {
        // 只有弹窗打开时才需要提示文字
        let prompt = match state {
            DialogState::Idle => None,
            _ => Some(prompt.into()),
        };
        Self { state, prompt }
    }
}
