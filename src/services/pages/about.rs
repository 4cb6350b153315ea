use actix_web::{HttpResponse, Result as ActixResult};

use crate::models::pages::responses::{ContentPage, ContentSection, NavLink};
use crate::models::{ApiResponse, paths};

const ADVANTAGES: [(&str, &str); 4] = [
    (
        "Precision Scheduling",
        "Automated time-slot management that prevents overlaps and maximizes instructor productivity.",
    ),
    (
        "Verified Tracking",
        "Immutable logs of student progress and enrollment status through our Core_Intelligence engine.",
    ),
    (
        "Direct Analytics",
        "Real-time data visualization for both learners and teachers to identify performance gaps.",
    ),
    (
        "Secure Portal",
        "Encrypted access for all institutional data, ensuring privacy and intellectual security.",
    ),
];

pub async fn about_page() -> ActixResult<HttpResponse> {
    let mut sections = vec![ContentSection {
        title: "Core_Definition".to_string(),
        body: "CLASS_MS is a high-performance Management Ecosystem designed to synchronize expert instructors with ambitious students. We remove the chaos of traditional scheduling, replacing it with a streamlined, industrial-grade interface for academic growth."
            .to_string(),
        items: Vec::new(),
    }];
    sections.extend(ADVANTAGES.iter().map(|(title, body)| ContentSection {
        title: title.to_string(),
        body: body.to_string(),
        items: Vec::new(),
    }));

    let page = ContentPage {
        headline: "THE BRIDGE TO ELITE_EDUCATION".to_string(),
        tagline: "Intelligence_Report_2026".to_string(),
        sections,
        calls_to_action: vec![
            NavLink::new("Back_to_Home", paths::HOME),
            NavLink::new("Initialize_Account", paths::SIGNUP),
            NavLink::new("System_Log_In", paths::LOGIN_AFTER_SIGNUP),
        ],
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(page, "ABOUT_SYSTEM")))
}
