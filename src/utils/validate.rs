use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{PortalError, Result};

static CONTACT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Invalid contact regex"));

// 密码允许的字符集，复杂度要求单独检查
static PASSWORD_CHARSET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9@$!%*?&]{10,}$").expect("Invalid password regex"));

const PASSWORD_SYMBOLS: &str = "@$!%*?&";

/// 联系电话：恰好 10 位数字
pub fn validate_contact(contact: &str) -> bool {
    CONTACT_RE.is_match(contact)
}

/// 密码复杂度验证
///
/// 策略要求：
/// - 最小长度：10 字符
/// - 必须包含：大写字母 + 小写字母 + 数字 + 符号（`@$!%*?&`）
/// - 只能由上述字符组成
pub fn validate_password(password: &str) -> bool {
    PASSWORD_CHARSET_RE.is_match(password)
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}

/// 课程费用：非负有限数
pub fn validate_price(price: f64) -> bool {
    price.is_finite() && price >= 0.0
}

pub fn validate_experience_years(years: i32) -> bool {
    years >= 0
}

/// 必填字段（对应表单中的 required 输入框）
pub fn validate_required(fields: &[(&str, &str)]) -> Result<()> {
    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((name, _)) => Err(PortalError::validation(format!("{name} is required."))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact() {
        assert!(validate_contact("0712345678"));
        assert!(!validate_contact("071234567"));
        assert!(!validate_contact("07123456789"));
        assert!(!validate_contact("07123-5678"));
        assert!(!validate_contact(" 0712345678"));
        // 全角数字不算
        assert!(!validate_contact("０７１２３４５６７８"));
    }

    #[test]
    fn test_valid_password() {
        assert!(validate_password("Abcdef123!"));
        assert!(validate_password("SecureP@ss1"));
    }

    #[test]
    fn test_short_password() {
        assert!(!validate_password("Abc12!"));
        assert!(!validate_password("Abcde123!"));
    }

    #[test]
    fn test_password_missing_classes() {
        assert!(!validate_password("abcdef123!"));
        assert!(!validate_password("ABCDEF123!"));
        assert!(!validate_password("Abcdefghi!"));
        assert!(!validate_password("Abcdef1234"));
    }

    #[test]
    fn test_password_foreign_symbol() {
        assert!(!validate_password("Abcdef123#"));
        assert!(!validate_password("Abcdef 123!"));
    }

    #[test]
    fn test_price() {
        assert!(validate_price(0.0));
        assert!(validate_price(2500.0));
        assert!(!validate_price(-1.0));
        assert!(!validate_price(f64::NAN));
        assert!(!validate_price(f64::INFINITY));
    }

    #[test]
    fn test_required() {
        assert!(validate_required(&[("fname", "A"), ("lname", "B")]).is_ok());
        let err = validate_required(&[("fname", "A"), ("lname", "  ")]).unwrap_err();
        assert_eq!(err.message(), "lname is required.");
    }
}
