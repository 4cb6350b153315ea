use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::{lenient, paths};

// 用户角色
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub enum UserRole {
    Student, // 学生
    Teacher, // 教师
}

impl UserRole {
    pub const STUDENT: &'static str = "student";
    pub const TEACHER: &'static str = "teacher";

    pub fn all() -> &'static [UserRole] {
        &[UserRole::Student, UserRole::Teacher]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => Self::STUDENT,
            UserRole::Teacher => Self::TEACHER,
        }
    }

    /// 登录后的首页
    pub fn home_path(&self) -> &'static str {
        match self {
            UserRole::Student => paths::STUDENT_HOME,
            UserRole::Teacher => paths::TEACHER_HOME,
        }
    }

    /// 下拉框中的显示名
    pub fn unit_label(&self) -> &'static str {
        match self {
            UserRole::Student => "STUDENT_UNIT",
            UserRole::Teacher => "TEACHER_UNIT",
        }
    }

    pub fn profile_title(&self) -> &'static str {
        match self {
            UserRole::Student => "STUDENT_PROFILE",
            UserRole::Teacher => "TEACHER_PROFILE",
        }
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            UserRole::STUDENT => Ok(UserRole::Student),
            UserRole::TEACHER => Ok(UserRole::Teacher),
            _ => Err(format!(
                "Invalid user role: '{s}'. Supported roles: student, teacher"
            )),
        }
    }
}

// 账户实体（后端返回）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct Account {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub fname: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub lname: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub contact: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub username: String,
    // 仅教师账户
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_i32"
    )]
    #[ts(optional)]
    pub experience_years: Option<i32>,
}
