use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::modules::auth::service::{AuthService, Claims};
use crate::shared::error::AppError;
use crate::shared::state::AppState;

/// Claims left behind by the role gate are reused; otherwise the bearer
/// token is verified here.
#[async_trait]
impl<S> FromRequestParts<S> for Claims
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(claims) = parts.extensions.get::<Claims>() {
            return Ok(claims.clone());
        }

        let state = AppState::from_ref(state);
        AuthService::authenticate(&state, &parts.headers).await
    }
}
