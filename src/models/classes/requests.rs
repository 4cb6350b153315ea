use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::{Class, DeliveryMode};

// 新增/编辑班级表单，同时也是提交给后端的请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassForm {
    pub class_name: String,
    pub description: String,
    pub subject: String,
    pub grade: String,
    pub language: String,
    #[serde(default)]
    pub mode: DeliveryMode,
    pub district: String,
    pub town: String,
    #[serde(default)]
    pub price: f64,
}

impl Default for ClassForm {
    fn default() -> Self {
        Self {
            class_name: String::new(),
            description: String::new(),
            subject: String::new(),
            grade: String::new(),
            language: String::new(),
            mode: DeliveryMode::Physical,
            district: String::new(),
            town: String::new(),
            price: 0.0,
        }
    }
}

impl From<Class> for ClassForm {
    fn from(class: Class) -> Self {
        Self {
            class_name: class.class_name,
            description: class.description,
            subject: class.subject,
            grade: class.grade,
            language: class.language,
            mode: class.mode,
            district: class.district,
            town: class.town,
            price: class.price,
        }
    }
}

impl ClassForm {
    /// 必填字段 (字段名, 值)
    pub fn required_fields(&self) -> [(&'static str, &str); 7] {
        [
            ("className", &self.class_name),
            ("description", &self.description),
            ("subject", &self.subject),
            ("grade", &self.grade),
            ("language", &self.language),
            ("district", &self.district),
            ("town", &self.town),
        ]
    }
}
