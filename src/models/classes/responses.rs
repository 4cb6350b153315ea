use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::{Class, DeliveryMode};
use super::requests::ClassForm;
use crate::models::common::{DialogView, paths};
use crate::models::schedules::responses::ScheduleSlot;

// 教师首页的班级卡片
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassCard {
    pub id: i64,
    pub class_name: String,
    pub subject: String,
    pub grade: String,
    pub language: String,
    pub mode: DeliveryMode,
    pub district: String,
    pub town: String,
    pub price: f64,
    pub link: String,
}

impl From<Class> for ClassCard {
    fn from(class: Class) -> Self {
        Self {
            link: paths::view_class(class.id),
            id: class.id,
            class_name: class.class_name,
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

// 教师首页
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct TeacherHomeView {
    pub classes: Vec<ClassCard>,
    pub add_link: String,
}

// 新增/编辑班级页
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassFormView {
    pub form: ClassForm,
    pub mode_options: Vec<DeliveryMode>,
    pub submit_to: String,
}

impl ClassFormView {
    pub fn new(form: ClassForm, submit_to: impl Into<String>) -> Self {
        Self {
            form,
            mode_options: DeliveryMode::all().to_vec(),
            submit_to: submit_to.into(),
        }
    }
}

// 班级详情页
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassDetailView {
    pub class: Class,
    pub schedules: Vec<ScheduleSlot>,
    pub add_schedule_link: String,
    pub edit_link: String,
    pub delete_dialog: DialogView,
}
