use actix_web::{
    HttpRequest, HttpResponseBuilder,
    cookie::{Cookie, CookieJar, SameSite, time::Duration},
};
use tracing::debug;

use super::{SessionKeys, SessionStore};
use crate::config::SessionConfig;

/// 基于 Cookie 的会话存储
///
/// 请求携带的 Cookie 作为 jar 的原始值，处理过程中的写入和删除只记录在 delta 中，
/// 最后由 [`CookieSessionStore::apply`] 转成 `Set-Cookie` 响应头。
pub struct CookieSessionStore {
    jar: CookieJar,
    secure: bool,
    max_age_days: i64,
}

impl CookieSessionStore {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            jar: CookieJar::new(),
            secure: config.cookie_secure,
            max_age_days: config.cookie_max_age_days,
        }
    }

    pub fn from_request(req: &HttpRequest, config: &SessionConfig) -> Self {
        let mut store = Self::new(config);
        match req.cookies() {
            Ok(cookies) => {
                for cookie in cookies
                    .iter()
                    .filter(|c| SessionKeys::all().any(|key| key == c.name()))
                {
                    store.jar.add_original(cookie.clone());
                }
            }
            Err(e) => debug!("Ignoring unparsable cookies: {}", e),
        }
        store
    }

    /// 把本次请求产生的 Cookie 变更写入响应
    pub fn apply(&self, builder: &mut HttpResponseBuilder) {
        for cookie in self.jar.delta() {
            builder.cookie(cookie.clone());
        }
    }

    fn build_cookie(&self, key: &str, value: &str) -> Cookie<'static> {
        Cookie::build(key.to_string(), value.to_string())
            .path("/")
            .same_site(SameSite::Lax)
            .http_only(SessionKeys::is_token_key(key))
            .secure(self.secure)
            .max_age(Duration::days(self.max_age_days))
            .finish()
    }
}

impl SessionStore for CookieSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.jar.get(key).map(|c| c.value().to_string())
    }

    fn set(&mut self, key: &str, value: &str) {
        let cookie = self.build_cookie(key, value);
        self.jar.add(cookie);
    }

    fn remove(&mut self, key: &str) {
        let cookie = Cookie::build(key.to_string(), "").path("/").finish();
        self.jar.remove(cookie);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::UserRole;
    use crate::session::{Session, SessionContext};
    use actix_web::{HttpResponse, test::TestRequest};

    fn config() -> SessionConfig {
        SessionConfig::default()
    }

    #[test]
    fn test_reads_request_cookies() {
        let req = TestRequest::default()
            .cookie(Cookie::new("token", "abc"))
            .cookie(Cookie::new("userRole", "teacher"))
            .to_http_request();
        let ctx = SessionContext::new(CookieSessionStore::from_request(&req, &config()));
        assert_eq!(ctx.read(), Some(Session::new("abc", UserRole::Teacher)));

        // 只读取不写入时不产生 Set-Cookie
        let mut builder = HttpResponse::Ok();
        ctx.store().apply(&mut builder);
        assert_eq!(builder.finish().cookies().count(), 0);
    }

    #[test]
    fn test_write_emits_set_cookie() {
        let req = TestRequest::default().to_http_request();
        let mut ctx = SessionContext::new(CookieSessionStore::from_request(&req, &config()));
        ctx.write(&Session::new("abc", UserRole::Student));

        let mut builder = HttpResponse::Ok();
        ctx.store().apply(&mut builder);
        let res = builder.finish();

        let cookies: Vec<_> = res.cookies().collect();
        assert_eq!(cookies.len(), 4);
        let token = cookies.iter().find(|c| c.name() == "token").unwrap();
        assert_eq!(token.value(), "abc");
        assert_eq!(token.http_only(), Some(true));
        assert_eq!(token.path(), Some("/"));
        let role = cookies.iter().find(|c| c.name() == "userType").unwrap();
        assert_eq!(role.value(), "student");
        assert_ne!(role.http_only(), Some(true));
    }

    #[test]
    fn test_clear_emits_removal_cookies() {
        let req = TestRequest::default()
            .cookie(Cookie::new("token", "abc"))
            .cookie(Cookie::new("accessToken", "abc"))
            .cookie(Cookie::new("userRole", "student"))
            .cookie(Cookie::new("userType", "student"))
            .to_http_request();
        let mut ctx = SessionContext::new(CookieSessionStore::from_request(&req, &config()));
        ctx.clear();
        assert_eq!(ctx.read(), None);

        let mut builder = HttpResponse::Ok();
        ctx.store().apply(&mut builder);
        let res = builder.finish();
        let cookies: Vec<_> = res.cookies().collect();
        assert_eq!(cookies.len(), 4);
        assert!(cookies.iter().all(|c| c.value().is_empty()));
    }

    #[test]
    fn test_unrelated_cookies_are_ignored() {
        let req = TestRequest::default()
            .cookie(Cookie::new("theme", "dark"))
            .to_http_request();
        let store = CookieSessionStore::from_request(&req, &config());
        assert_eq!(store.get("theme"), None);
    }
}
