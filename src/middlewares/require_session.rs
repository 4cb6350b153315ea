/*!
 * 会话校验中间件
 *
 * 受保护页面在处理请求前检查会话 Cookie 是否同时包含 token 与角色。
 * 缺少任一项时直接 303 重定向到 `/login`，处理函数不会执行，也不会向后端发出任何请求。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::{web, App};
 * use crate::middlewares::RequireSession;
 *
 * App::new().service(
 *     web::resource("/account")
 *         .wrap(RequireSession)
 *         .route(web::get().to(view_account)),
 * );
 * ```
 *
 * 处理函数中通过 [`RequireSession::extract_session`] 取出会话。
 *
 * 令牌的签名与有效期不在这里校验，失效的令牌会在调用后端时暴露出来。
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpRequest,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::{debug, info};

use super::create_redirect_response;
use crate::config::AppConfig;
use crate::session::{CookieSessionStore, Session, SessionContext};

#[derive(Clone)]
pub struct RequireSession;

impl<S, B> Transform<S, ServiceRequest> for RequireSession
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireSessionMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireSessionMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireSessionMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireSessionMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 跨域预检请求直接放行
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(srv.call(req).await?.map_into_left_body());
            }

            let session = SessionContext::new(CookieSessionStore::from_request(
                req.request(),
                &AppConfig::get().session,
            ))
            .read();

            match session {
                Some(session) => {
                    debug!("Session found for {} on {}", session.role, req.path());
                    req.extensions_mut().insert(session);
                    Ok(srv.call(req).await?.map_into_left_body())
                }
                None => {
                    info!("No session for {}, redirecting to login", req.path());
                    Ok(req.into_response(create_redirect_response().map_into_right_body()))
                }
            }
        })
    }
}

impl RequireSession {
    /// 从请求扩展中取出会话
    /// 此函数应该在应用了 RequireSession 中间件的路由处理程序中使用
    pub fn extract_session(req: &HttpRequest) -> Option<Session> {
        req.extensions().get::<Session>().cloned()
    }
}
