use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Schedule;
use crate::models::common::paths;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct ScheduleSlot {
    pub id: i64,
    pub day_of_week: String,
    /// HH:MM
    pub start: String,
    /// HH:MM
    pub end: String,
    pub link: String,
}

/// 截取 `HH:MM:SS` 的前五位
fn clock(time: &str) -> String {
    time.chars().take(5).collect()
}

impl From<Schedule> for ScheduleSlot {
    fn from(schedule: Schedule) -> Self {
        Self {
            link: paths::view_schedule(schedule.id),
            id: schedule.id,
            start: clock(&schedule.start_time),
            end: clock(&schedule.end_time),
            day_of_week: schedule.day_of_week,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_trims_seconds() {
        let slot = ScheduleSlot::from(Schedule {
            id: 3,
            day_of_week: "MONDAY".to_string(),
            start_time: "08:30:00".to_string(),
            end_time: "10:00".to_string(),
        });
        assert_eq!(slot.start, "08:30");
        assert_eq!(slot.end, "10:00");
        assert_eq!(slot.link, "/ViewSchedule/3");
    }
}
