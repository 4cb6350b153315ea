//! Bearer token 负载解析
//!
//! 只读取 JWT 第二段中的 `sub` 作为用户 ID，用于拼接 `/api/{students|teachers}/{id}`。
//! 不校验签名与过期时间，令牌是否有效由后端在后续请求中判定。

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde_json::Value;
use std::fmt;

// JWT 使用 URL 安全字母表且通常不带填充
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// 没有负载段
    Malformed,
    /// 负载段不是合法的 base64
    Encoding(String),
    /// 负载不是 JSON 对象
    Json(String),
    MissingSubject,
    /// `sub` 不是正整数
    InvalidSubject(String),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::Malformed => write!(f, "token has no payload segment"),
            TokenError::Encoding(e) => write!(f, "token payload is not base64: {e}"),
            TokenError::Json(e) => write!(f, "token payload is not JSON: {e}"),
            TokenError::MissingSubject => write!(f, "token payload has no 'sub' claim"),
            TokenError::InvalidSubject(s) => write!(f, "token subject is not a user id: {s}"),
        }
    }
}

impl std::error::Error for TokenError {}

/// 从 bearer token 中取出用户 ID
pub fn decode_subject(token: &str) -> Result<i64, TokenError> {
    let payload = token
        .trim()
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or(TokenError::Malformed)?;

    let bytes = URL_SAFE_LENIENT
        .decode(payload)
        .or_else(|_| STANDARD_LENIENT.decode(payload))
        .map_err(|e| TokenError::Encoding(e.to_string()))?;

    let claims: Value =
        serde_json::from_slice(&bytes).map_err(|e| TokenError::Json(e.to_string()))?;

    let subject = claims
        .as_object()
        .ok_or_else(|| TokenError::Json("payload is not an object".to_string()))?
        .get("sub")
        .ok_or(TokenError::MissingSubject)?;

    parse_subject(subject)
}

fn parse_subject(subject: &Value) -> Result<i64, TokenError> {
    let id = match subject {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    match id {
        Some(id) if id > 0 => Ok(id),
        _ => Err(TokenError::InvalidSubject(subject.to_string())),
    }
}
