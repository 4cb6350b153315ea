use crate::errors::PortalError;

// 页面响应中的业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 请求与校验
    BadRequest = 1000,
    ValidationFailed = 1001,
    SessionInvalid = 1002,
    NotFound = 1004,

    // 后端服务
    UpstreamRejected = 2001,
    BackendUnreachable = 2002,

    // 删除确认
    ConfirmationRequired = 3001,
    ActionInFlight = 3002,

    NotImplemented = 4001,
    InternalServerError = 5000,
}

impl From<&PortalError> for ErrorCode {
    fn from(err: &PortalError) -> Self {
        match err {
            PortalError::Validation(_) => ErrorCode::ValidationFailed,
            PortalError::SessionInvalid(_) => ErrorCode::SessionInvalid,
            PortalError::UpstreamRejected(_) => ErrorCode::UpstreamRejected,
            PortalError::BackendUnreachable(_) => ErrorCode::BackendUnreachable,
            PortalError::Serialization(_) | PortalError::Configuration(_) => {
                ErrorCode::InternalServerError
            }
        }
    }
}
