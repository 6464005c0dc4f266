use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::modules::auth::service::AuthService;
use crate::modules::roles::service::RoleService;
use crate::shared::{error::AppResult, state::AppState};

/// State for [`require_role`]: the app state plus the role a route demands.
#[derive(Clone)]
pub struct RequiredRole {
    pub state: AppState,
    pub role: &'static str,
}

impl RequiredRole {
    pub fn new(state: &AppState, role: &'static str) -> Self {
        Self {
            state: state.clone(),
            role,
        }
    }
}

/// Rejects the request unless the bearer's role level is at least the
/// required role's level. Verified claims are handed to the handler as a
/// request extension.
pub async fn require_role(
    State(gate): State<RequiredRole>,
    mut request: Request,
    next: Next,
) -> AppResult<Response> {
    let claims = AuthService::authenticate(&gate.state, request.headers()).await?;

    RoleService::authorize(&*gate.state.db, &claims.role, gate.role).await?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
