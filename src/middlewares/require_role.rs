/*!
 * 基于角色的访问控制中间件
 *
 * 此中间件必须在 RequireSession 中间件之后使用。角色不符时与未登录一样重定向到 `/login`。
 *
 * ```rust,ignore
 * web::resource("/TeacherHome")
 *     .wrap(RequireRole::new(UserRole::Teacher))
 *     .wrap(RequireSession)
 *     .route(web::get().to(teacher_home))
 * ```
 *
 * actix 的 `wrap` 后注册的先执行，所以 RequireSession 写在后面。
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::info;

use super::create_redirect_response;
use crate::models::users::entities::UserRole;
use crate::session::Session;

#[derive(Clone)]
pub struct RequireRole {
    required_role: UserRole,
}

impl RequireRole {
    /// 创建需要特定角色的中间件
    pub fn new(role: UserRole) -> Self {
        Self {
            required_role: role,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service: Rc::new(service),
            required_role: self.required_role,
        }))
    }
}

pub struct RequireRoleMiddleware<S> {
    service: Rc<S>,
    required_role: UserRole,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
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
        let required_role = self.required_role;

        Box::pin(async move {
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(srv.call(req).await?.map_into_left_body());
            }

            let role = req.extensions().get::<Session>().map(|s| s.role);

            match role {
                Some(role) if role == required_role => {
                    Ok(srv.call(req).await?.map_into_left_body())
                }
                Some(role) => {
                    info!(
                        "Access denied to {} for role {}. Required role: {}",
                        req.path(),
                        role,
                        required_role
                    );
                    Ok(req.into_response(create_redirect_response().map_into_right_body()))
                }
                None => {
                    info!(
                        "Role check failed: No session found in request. Make sure RequireSession middleware is applied first."
                    );
                    Ok(req.into_response(create_redirect_response().map_into_right_body()))
                }
            }
        })
    }
}
