//! 宽松的数字反序列化
//!
//! 前端表单里的数字输入框常以字符串提交（`"5"`），后端则返回数字（`5`），
//! 两种形式都要接受；空字符串与 `null` 视为未填写。
//! 后端记录中的 `null` 字段按类型默认值处理。

use serde::{Deserialize, Deserializer};

/// `null` 与缺失一样取默认值，需配合 `#[serde(default)]` 使用
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(i64),
    Text(String),
}

pub fn optional_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrText>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => i32::try_from(n)
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("number out of range: {n}"))),
        Some(NumberOrText::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrText::Text(s)) => s
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("not a whole number: '{s}'"))),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct YearsForm {
        #[serde(default, deserialize_with = "super::optional_i32")]
        years: Option<i32>,
    }

    #[derive(Deserialize)]
    struct Record {
        #[serde(default, deserialize_with = "super::null_as_default")]
        price: f64,
        #[serde(default, deserialize_with = "super::null_as_default")]
        town: String,
    }

    fn parse(json: &str) -> Result<Option<i32>, serde_json::Error> {
        serde_json::from_str::<YearsForm>(json).map(|f| f.years)
    }

    #[test]
    fn test_accepts_number_and_text() {
        assert_eq!(parse(r#"{"years": 7}"#).unwrap(), Some(7));
        assert_eq!(parse(r#"{"years": " 12 "}"#).unwrap(), Some(12));
    }

    #[test]
    fn test_blank_and_missing_are_none() {
        assert_eq!(parse(r#"{"years": ""}"#).unwrap(), None);
        assert_eq!(parse(r#"{"years": null}"#).unwrap(), None);
        assert_eq!(parse(r#"{}"#).unwrap(), None);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse(r#"{"years": "ten"}"#).is_err());
    }

    #[test]
    fn test_null_fields_take_defaults() {
        let record: Record = serde_json::from_str(r#"{"price": null, "town": null}"#).unwrap();
        assert_eq!(record.price, 0.0);
        assert_eq!(record.town, "");

        let record: Record = serde_json::from_str(r#"{"price": 1200.5}"#).unwrap();
        assert_eq!(record.price, 1200.5);
        assert_eq!(record.town, "");
    }
}
