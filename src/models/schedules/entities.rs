use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 上课时间（后端返回，属于某个班级）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct Schedule {
    pub id: i64,
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
}
