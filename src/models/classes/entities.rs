use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::lenient;

// 授课方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub enum DeliveryMode {
    #[default]
    Physical,
    Online,
    Hybrid,
}

impl DeliveryMode {
    pub fn all() -> &'static [DeliveryMode] {
        &[DeliveryMode::Physical, DeliveryMode::Online, DeliveryMode::Hybrid]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryMode::Physical => "Physical",
            DeliveryMode::Online => "Online",
            DeliveryMode::Hybrid => "Hybrid",
        }
    }
}

// 编辑页历史上提交大写形式（"ONLINE"），这里统一大小写不敏感
impl std::str::FromStr for DeliveryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "physical" => Ok(DeliveryMode::Physical),
            "online" => Ok(DeliveryMode::Online),
            "hybrid" => Ok(DeliveryMode::Hybrid),
            _ => Err(format!(
                "Invalid delivery mode: '{s}'. Supported modes: Physical, Online, Hybrid"
            )),
        }
    }
}

impl<'de> Deserialize<'de> for DeliveryMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for DeliveryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// 班级实体（后端返回）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct Class {
    pub id: i64,
    pub class_name: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub subject: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub grade: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub language: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub mode: DeliveryMode,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub district: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub town: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_is_case_insensitive() {
        assert_eq!("ONLINE".parse::<DeliveryMode>(), Ok(DeliveryMode::Online));
        assert_eq!("physical".parse::<DeliveryMode>(), Ok(DeliveryMode::Physical));
        assert_eq!(" Hybrid ".parse::<DeliveryMode>(), Ok(DeliveryMode::Hybrid));
        assert!("Correspondence".parse::<DeliveryMode>().is_err());
    }

    #[test]
    fn test_mode_serializes_title_case() {
        let json = serde_json::to_string(&DeliveryMode::Hybrid).unwrap();
        assert_eq!(json, "\"Hybrid\"");
    }

    #[test]
    fn test_class_from_backend_json() {
        let json = r#"{
            "id": 7,
            "className": "Combined Maths",
            "description": "A/L revision",
            "subject": "Maths",
            "grade": "Grade 12",
            "language": "Sinhala",
            "mode": "PHYSICAL",
            "district": "Kandy",
            "town": "Peradeniya",
            "price": 2500,
            "teacherId": 3
        }"#;
        let class: Class = serde_json::from_str(json).unwrap();
        assert_eq!(class.class_name, "Combined Maths");
        assert_eq!(class.mode, DeliveryMode::Physical);
        assert_eq!(class.price, 2500.0);
    }

    #[test]
    fn test_class_with_null_fields() {
        let json = r#"{
            "id": 9,
            "className": "English Literature",
            "description": null,
            "mode": null,
            "town": null,
            "price": null
        }"#;
        let class: Class = serde_json::from_str(json).unwrap();
        assert_eq!(class.mode, DeliveryMode::Physical);
        assert_eq!(class.price, 0.0);
        assert_eq!(class.town, "");

        let classes: Vec<Class> =
            serde_json::from_str(&format!("[{json}, {{\"id\": 10, \"className\": \"Art\"}}]"))
                .unwrap();
        assert_eq!(classes.len(), 2);
    }
}
