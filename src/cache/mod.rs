//! 进程内缓存
//!
//! 目前只承载删除确认对话框的状态。

pub mod confirmations;

pub use confirmations::{ConfirmError, ConfirmStore, ConfirmationKey, DialogState};
