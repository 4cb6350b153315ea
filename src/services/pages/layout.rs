use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::config::AppConfig;
use crate::models::pages::responses::{FooterView, LayoutView, NavLink, NavbarView};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, paths};
use crate::services::session_context;
use crate::session::Session;

const BRAND: &str = "TUITION_FINDER";

pub async fn layout(request: &HttpRequest) -> ActixResult<HttpResponse> {
    let session = session_context(request).read();
    let view = LayoutView {
        navbar: navbar(session.as_ref()),
        footer: footer(),
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        view,
        AppConfig::get().app.system_name.clone(),
    )))
}

pub(crate) fn navbar(session: Option<&Session>) -> NavbarView {
    let role = session.map(|s| s.role);
    let home_path = role.map_or(paths::HOME, |r| r.home_path());

    let mut links = vec![NavLink::new("HOME", home_path)];
    match role {
        None => links.push(NavLink::new("ABOUT", paths::ABOUT)),
        Some(UserRole::Teacher) => links.push(NavLink::new("ADD CLASS", paths::ADD_CLASS)),
        Some(UserRole::Student) => links.push(NavLink::new("LEADERBOARD", paths::LEADERBOARD)),
    }

    let actions = match role {
        None => vec![
            NavLink::new("LOGIN", paths::LOGIN),
            NavLink::new("SIGNUP", paths::SIGNUP),
        ],
        Some(_) => vec![
            NavLink::new("MY ACCOUNT", paths::ACCOUNT),
            NavLink::new("LOGOUT", paths::LOGOUT),
        ],
    };

    NavbarView {
        brand: BRAND.to_string(),
        home_path: home_path.to_string(),
        logged_in: role.is_some(),
        role,
        links,
        actions,
    }
}

fn footer() -> FooterView {
    FooterView {
        version: "Core_v.4.0_Stable".to_string(),
        links: vec![
            NavLink::new("Home", paths::HOME),
            NavLink::new("About", paths::ABOUT),
            NavLink::new("Login", paths::LOGIN),
            NavLink::new("Signup", paths::SIGNUP),
        ],
        status: vec![
            NavLink::new("Encryption", "AES_256"),
            NavLink::new("Connection", "Secure"),
        ],
        copyright: "© 2026 Core_Intelligence_Unit".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(links: &[NavLink]) -> Vec<&str> {
        links.iter().map(|l| l.label.as_str()).collect()
    }

    #[test]
    fn test_logged_out_navbar() {
        let nav = navbar(None);
        assert!(!nav.logged_in);
        assert_eq!(nav.home_path, "/");
        assert_eq!(labels(&nav.links), ["HOME", "ABOUT"]);
        assert_eq!(labels(&nav.actions), ["LOGIN", "SIGNUP"]);
    }

    #[test]
    fn test_teacher_navbar() {
        let session = Session::new("t", UserRole::Teacher);
        let nav = navbar(Some(&session));
        assert_eq!(nav.home_path, "/TeacherHome");
        assert_eq!(labels(&nav.links), ["HOME", "ADD CLASS"]);
        assert_eq!(labels(&nav.actions), ["MY ACCOUNT", "LOGOUT"]);
    }

    #[test]
    fn test_student_navbar() {
        let session = Session::new("t", UserRole::Student);
        let nav = navbar(Some(&session));
        assert_eq!(nav.home_path, "/StudentHome");
        assert_eq!(labels(&nav.links), ["HOME", "LEADERBOARD"]);
    }
}
