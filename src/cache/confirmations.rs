//! 删除确认状态机
//!
//! 每个破坏性操作（删除账号、删除课程）都必须先打开确认对话框，
//! 再由同一会话确认后才会真正向后端发出 DELETE。
//!
//! ```text
//! Idle --open--> ConfirmPending --abort--> Idle
//!                ConfirmPending --begin--> InFlight --finish--> Idle
//! ```
//!
//! 状态以 `{role}:{user_id}:{target}` 为键保存在 moka 缓存中，超过 TTL 的对话框自动回到 Idle。

use moka::future::Cache;
use moka::ops::compute::{CompResult, Op};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::debug;
use ts_rs::TS;

use crate::config::ConfirmConfig;
use crate::models::users::entities::UserRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/dialog.ts")]
pub enum DialogState {
    Idle,
    ConfirmPending,
    InFlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmError {
    /// 未打开确认对话框
    NotPending,
    /// 同一目标的删除请求仍在进行
    InFlight,
}

impl fmt::Display for ConfirmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfirmError::NotPending => write!(f, "Deletion was not requested or has expired."),
            ConfirmError::InFlight => write!(f, "Deletion is already in progress."),
        }
    }
}

impl std::error::Error for ConfirmError {}

/// 确认状态的缓存键
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfirmationKey(String);

impl ConfirmationKey {
    pub fn account(role: UserRole, user_id: i64) -> Self {
        Self(format!("{role}:{user_id}:account"))
    }

    pub fn class(role: UserRole, user_id: i64, class_id: i64) -> Self {
        Self(format!("{role}:{user_id}:class:{class_id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone)]
pub struct ConfirmStore {
    inner: Cache<String, DialogState>,
}

impl ConfirmStore {
    pub fn new(config: &ConfirmConfig) -> Self {
        let inner = Cache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(Duration::from_secs(config.ttl_secs))
            .build();

        debug!(
            "ConfirmStore initialized with ttl {}s, capacity {}",
            config.ttl_secs, config.max_capacity
        );
        Self { inner }
    }

    pub async fn state(&self, key: &ConfirmationKey) -> DialogState {
        self.inner
            .get(key.as_str())
            .await
            .unwrap_or(DialogState::Idle)
    }

    /// 打开确认对话框；已在删除中的目标保持 InFlight
    pub async fn open(&self, key: &ConfirmationKey) -> DialogState {
        let entry = self
            .inner
            .entry(key.as_str().to_string())
            .or_insert(DialogState::ConfirmPending)
            .await;
        let state = entry.into_value();
        debug!("Confirmation {} opened, state {:?}", key.as_str(), state);
        state
    }

    /// 取消确认，不会打断进行中的删除
    pub async fn abort(&self, key: &ConfirmationKey) -> DialogState {
        match self.inner.get(key.as_str()).await {
            Some(DialogState::InFlight) => DialogState::InFlight,
            _ => {
                self.inner.invalidate(key.as_str()).await;
                DialogState::Idle
            }
        }
    }

    /// 确认删除，ConfirmPending -> InFlight
    ///
    /// 状态转换在 `and_compute_with` 中原子完成，两个并发确认中只有一个能成功；
    /// 超过 TTL 的条目视为不存在。
    pub async fn begin(&self, key: &ConfirmationKey) -> Result<(), ConfirmError> {
        let result = self
            .inner
            .entry(key.as_str().to_string())
            .and_compute_with(|current| async move {
                match current.map(|entry| entry.into_value()) {
                    Some(DialogState::ConfirmPending) => Op::Put(DialogState::InFlight),
                    _ => Op::Nop,
                }
            })
            .await;

        match result {
            CompResult::ReplacedWith(_) | CompResult::Inserted(_) => Ok(()),
            CompResult::Unchanged(entry) if *entry.value() == DialogState::InFlight => {
                Err(ConfirmError::InFlight)
            }
            _ => Err(ConfirmError::NotPending),
        }
    }

    /// 删除请求结束（无论成败），回到 Idle
    pub async fn finish(&self, key: &ConfirmationKey) {
        self.inner.invalidate(key.as_str()).await;
    }
}
