pub mod error_code;
pub mod lenient;
pub mod navigation;
pub mod response;

pub use error_code::ErrorCode;
pub use navigation::{Navigation, paths};
pub use response::{ApiResponse, DialogView};
