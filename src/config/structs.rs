use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub backend: BackendConfig,
    pub session: SessionConfig,
    pub confirm: ConfirmConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub unix_socket_path: String,
    pub workers: usize,
    pub max_workers: usize,
    pub timeouts: TimeoutConfig,
    pub limits: LimitConfig,
}

/// 超时配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    pub client_request: u64,
    pub client_disconnect: u64,
    pub keep_alive: u64,
}

/// 限制配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitConfig {
    pub max_payload_size: usize,
}

/// CORS 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub max_age: usize,
}

/// 后端服务地址
///
/// 四个服务各自独立配置，两者可以共用同一主机（默认 class 与 schedule 同在 8084）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    pub teacher_url: String,
    pub student_url: String,
    pub class_url: String,
    pub schedule_url: String,
}

/// 会话 Cookie 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub cookie_secure: bool,
    pub cookie_max_age_days: i64,
}

/// 删除确认弹窗配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmConfig {
    pub ttl_secs: u64,
    pub max_capacity: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            teacher_url: "http://localhost:8082/api/teachers".to_string(),
            student_url: "http://localhost:8083/api/students".to_string(),
            class_url: "http://localhost:8084/api/classes".to_string(),
            schedule_url: "http://localhost:8084/api/schedules".to_string(),
        }
    }
}

impl Default for ConfirmConfig {
    fn default() -> Self {
        Self {
            ttl_secs: 300,
            max_capacity: 10_000,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_secure: false,
            cookie_max_age_days: 7,
        }
    }
}
