pub mod parameter_error_handler;
pub mod token;
pub mod validate;

pub use parameter_error_handler::{json_error_handler, query_error_handler};
pub use token::{TokenError, decode_subject};
