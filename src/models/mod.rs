pub mod auth;
pub mod classes;
pub mod common;
pub mod pages;
pub mod schedules;
pub mod users;

pub use common::{ApiResponse, DialogView, ErrorCode, Navigation, paths};
