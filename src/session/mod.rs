//! 会话存储
//!
//! 会话只包含后端签发的 bearer token 和用户角色。历史上两者各有两个键名
//! （`token`/`accessToken`、`userRole`/`userType`），写入时全部写，读取时按顺序取第一个。

pub mod cookie;

use std::collections::HashMap;

use crate::models::users::entities::UserRole;

pub use cookie::CookieSessionStore;

/// 会话键名
pub struct SessionKeys;

impl SessionKeys {
    pub const TOKEN: [&'static str; 2] = ["token", "accessToken"];
    pub const ROLE: [&'static str; 2] = ["userRole", "userType"];

    pub fn all() -> impl Iterator<Item = &'static str> {
        Self::TOKEN.into_iter().chain(Self::ROLE)
    }

    pub fn is_token_key(key: &str) -> bool {
        Self::TOKEN.contains(&key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub role: UserRole,
}

impl Session {
    pub fn new(token: impl Into<String>, role: UserRole) -> Self {
        Self {
            token: token.into(),
            role,
        }
    }
}

pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

impl SessionStore for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        HashMap::remove(self, key);
    }
}

pub struct SessionContext<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> SessionContext<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// 读取当前会话，缺少 token 或角色无法识别时视为未登录
    pub fn read(&self) -> Option<Session> {
        let token = first_present(&self.store, &SessionKeys::TOKEN)?;
        let role = first_present(&self.store, &SessionKeys::ROLE)?
            .parse::<UserRole>()
            .ok()?;
        Some(Session { token, role })
    }

    pub fn write(&mut self, session: &Session) {
        for key in SessionKeys::TOKEN {
            self.store.set(key, &session.token);
        }
        for key in SessionKeys::ROLE {
            self.store.set(key, session.role.as_str());
        }
    }

    pub fn clear(&mut self) {
        for key in SessionKeys::all() {
            self.store.remove(key);
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn first_present<S: SessionStore>(store: &S, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| store.get(key))
        .find(|value| !value.is_empty())
}
