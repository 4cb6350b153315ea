pub mod requests;
pub mod responses;

pub use requests::{LoginCredentials, LoginRequest, SignupPayload, SignupRequest};
pub use responses::{LoginResponse, LoginView, RoleOption, SignupView};
