//! 인증 미들웨어 내부 서비스
//!
//! 요청에서 Bearer 토큰을 추출하여 검증하고, 성공 시
//! `AuthenticatedUser`를 요청 extensions에 저장합니다.

use std::rc::Rc;

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse},
    Error, HttpMessage, ResponseError,
    body::EitherBody,
    web,
};
use futures_util::future::LocalBoxFuture;

use crate::domain::auth::authenticated_user::AuthenticatedUser;
use crate::domain::auth::authentication_request::{AuthMode, RequiredRole};
use crate::errors::errors::AppError;
use crate::services::auth::token_service::TokenService;

/// 인증 미들웨어 서비스
pub struct AuthMiddlewareService<S> {
    pub(crate) service: Rc<S>,
    pub(crate) mode: AuthMode,
    pub(crate) required_role: Option<RequiredRole>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let mode = self.mode.clone();
        let required_role = self.required_role.clone();

        Box::pin(async move {
            let auth_result = match req.app_data::<web::Data<TokenService>>() {
                Some(token_service) => extract_authenticated_user(&req, token_service.get_ref()),
                None => Err(AppError::InternalError(
                    "Token service not configured".to_string(),
                )),
            };

            match (mode, auth_result) {
                // 필수 인증 실패 시 401 응답
                (AuthMode::Required, Err(err)) => {
                    log::debug!("인증 실패: {}", err);
                    let response = AppError::Unauthenticated(
                        "Authentication required".to_string(),
                    )
                    .error_response();
                    Ok(req.into_response(response).map_into_right_body())
                }
                // 필수 인증 성공 시 역할 검사 후 통과
                (AuthMode::Required, Ok(user)) => {
                    if let Some(required) = required_role {
                        if !required.is_satisfied(&user.role) {
                            log::debug!(
                                "권한 부족: role={}, required={:?}",
                                user.role,
                                required
                            );
                            let response = AppError::Forbidden(
                                "Insufficient permissions".to_string(),
                            )
                            .error_response();
                            return Ok(req.into_response(response).map_into_right_body());
                        }
                    }
                    req.extensions_mut().insert(user);
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                // 선택적 인증: 성공하면 사용자 정보 저장, 실패해도 통과
                (AuthMode::Optional, Ok(user)) => {
                    req.extensions_mut().insert(user);
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                (AuthMode::Optional, Err(_)) => {
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
            }
        })
    }
}

/// 요청의 Authorization 헤더에서 토큰을 꺼내 검증합니다.
fn extract_authenticated_user(
    req: &ServiceRequest,
    token_service: &TokenService,
) -> Result<AuthenticatedUser, AppError> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthenticated("Missing authorization header".to_string()))?;

    let token = token_service.extract_bearer_token(auth_header)?;
    let claims = token_service.verify_access_token(token)?;

    Ok(AuthenticatedUser {
        user_id: claims.sub,
        email: claims.email,
        role: claims.role,
    })
}
