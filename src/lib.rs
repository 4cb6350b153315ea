//! Tuition Portal - 补习班协调平台前端服务
//!
//! 基于 Actix Web 的页面服务层，浏览器只与门户通信，门户再调用教师、学生、课程、时间表四个后端服务。
//!
//! # 架构
//! - `cache`: 删除确认状态（Moka）
//! - `client`: 后端服务客户端（reqwest）
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `middlewares`: 会话与角色校验中间件
//! - `models`: 视图模型与后端数据结构
//! - `routes`: 页面路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 页面逻辑层
//! - `session`: 会话存储（Cookie）
//! - `utils`: 令牌解析、表单校验等工具函数

pub mod cache;
pub mod client;
pub mod config;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod session;
pub mod utils;
