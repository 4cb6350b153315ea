use actix_web::{HttpResponse, Result as ActixResult};

use super::items;
use crate::models::pages::responses::{ContentPage, ContentSection, NavLink};
use crate::models::{ApiResponse, paths};

pub async fn home_page() -> ActixResult<HttpResponse> {
    let page = ContentPage {
        headline: "ELEVATE LEARNING".to_string(),
        tagline: "The professional coordination layer for Expert Educators & High-Performance Students."
            .to_string(),
        sections: vec![
            ContentSection {
                title: "The_Platform".to_string(),
                body: "CLASS_MS is a decentralized educational ecosystem designed to bridge the gap between quality tutors and ambitious learners. We provide the architecture for verified academic rankings."
                    .to_string(),
                items: Vec::new(),
            },
            ContentSection {
                title: "Instructor_Edge".to_string(),
                body: String::new(),
                items: items(&[
                    "Global Module Deployment",
                    "Real-time Analytics",
                    "Secure Enrollment Logs",
                    "Excellence Badges",
                ]),
            },
            ContentSection {
                title: "Learner_Terminal".to_string(),
                body: String::new(),
                items: items(&[
                    "District Discovery",
                    "Verified Leaderboards",
                    "Transparent Reviews",
                    "Schedule Sync",
                ]),
            },
        ],
        calls_to_action: vec![
            NavLink::new("About System", paths::ABOUT),
            NavLink::new("Create_Account", paths::SIGNUP),
            NavLink::new("Existing_User_Log_In", paths::LOGIN_AFTER_SIGNUP),
        ],
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(page, "Next_Generation_Standard")))
}
