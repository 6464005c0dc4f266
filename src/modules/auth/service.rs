use axum::http::{header, HeaderMap};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use sea_orm::{DatabaseConnection, EntityTrait};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::dtos::{AuthenticatedUser, LoginRequest, LoginResponse};
use super::password;
use crate::modules::roles::{entities::role, USER};
use crate::modules::users::dtos::{RegisterRequest, UserResponse};
use crate::modules::users::entities::user;
use crate::modules::users::service::UserService;
use crate::shared::config::Config;
use crate::shared::error::{AppError, AppResult};
use crate::shared::state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user id
    pub email: String,
    pub role: String,
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn user_id(&self) -> AppResult<i32> {
        self.sub
            .parse()
            .map_err(|_| AppError::Unauthorized("Invalid token subject".to_string()))
    }
}

pub struct AuthService;

impl AuthService {
    pub fn issue_token(config: &Config, user: &user::Model, role: &str) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            role: role.to_string(),
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(config.jwt_ttl_hours)).timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .map_err(|e| AppError::InternalServerError(format!("JWT generation failed: {}", e)))
    }

    /// Signature and expiry only; revocation is checked by [`AuthService::authenticate`].
    /// No expiry leeway: a revocation entry only has to outlive `exp` itself.
    pub fn decode_token(config: &Config, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))
    }

    pub fn bearer_token(headers: &HeaderMap) -> AppResult<&str> {
        let value = headers
            .get(header::AUTHORIZATION)
            .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".to_string()))?
            .to_str()
            .map_err(|_| AppError::Unauthorized("Invalid Authorization header".to_string()))?;

        value
            .strip_prefix("Bearer ")
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::Unauthorized("Invalid token format".to_string()))
    }

    pub async fn authenticate(state: &AppState, headers: &HeaderMap) -> AppResult<Claims> {
        let token = Self::bearer_token(headers)?;
        let claims = Self::decode_token(&state.config, token)?;

        if state.revocations.is_revoked(&claims.jti).await? {
            return Err(AppError::Unauthorized("Token has been revoked".to_string()));
        }

        Ok(claims)
    }

    pub async fn register(
        db: &DatabaseConnection,
        payload: RegisterRequest,
    ) -> AppResult<UserResponse> {
        let create = payload.into_create()?;
        UserService::create(db, create).await
    }

    pub async fn login(state: &AppState, payload: LoginRequest) -> AppResult<LoginResponse> {
        let invalid = || AppError::Unauthorized("Invalid credentials".to_string());

        let found = UserService::find_by_email(&*state.db, &payload.email)
            .await?
            .ok_or_else(invalid)?;

        if !found.is_active || !password::verify_password(&payload.password, &found.password_hash)
        {
            tracing::info!("Rejected login for user {}", found.id);
            return Err(invalid());
        }

        let role_name = match found.role_id {
            Some(role_id) => role::Entity::find_by_id(role_id)
                .one(&*state.db)
                .await?
                .map(|r| r.name),
            None => None,
        }
        .unwrap_or_else(|| USER.to_string());

        let token = Self::issue_token(&state.config, &found, &role_name)?;
        let found = UserService::touch_last_login(&*state.db, found).await?;

        Ok(LoginResponse {
            msg: "Login successful".to_string(),
            access_token: token,
            user: AuthenticatedUser {
                id: found.id,
                email: found.email,
                role: role_name,
            },
        })
    }

    pub async fn logout(state: &AppState, claims: &Claims) -> AppResult<()> {
        state.revocations.revoke(&claims.jti, claims.exp).await?;
        tracing::info!("Revoked token {} for user {}", claims.jti, claims.sub);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::revocation::InMemoryRevocationStore;
    use crate::shared::config::test_config;
    use axum::http::HeaderValue;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

    fn sample_user() -> user::Model {
        user::Model {
            id: 7,
            email: "ops@example.com".to_owned(),
            password_hash: String::new(),
            first_name: None,
            last_name: None,
            role_id: Some(2),
            is_active: true,
            created_at: Utc::now().naive_utc(),
            last_login: None,
        }
    }

    fn state() -> AppState {
        AppState {
            config: Arc::new(test_config()),
            db: Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection()),
            revocations: Arc::new(InMemoryRevocationStore::default()),
        }
    }

    fn bearer(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
        );
        headers
    }

    #[test]
    fn test_issue_and_decode_round_trip() {
        let config = test_config();
        let token = AuthService::issue_token(&config, &sample_user(), "manager").unwrap();
        let claims = AuthService::decode_token(&config, &token).unwrap();

        assert_eq!(claims.sub, "7");
        assert_eq!(claims.user_id().unwrap(), 7);
        assert_eq!(claims.role, "manager");
        assert_eq!(claims.exp - claims.iat, config.jwt_ttl_hours * 3600);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let mut other = test_config();
        other.jwt_secret = "another".to_string();
        let token = AuthService::issue_token(&other, &sample_user(), "user").unwrap();

        let result = AuthService::decode_token(&test_config(), &token);
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn test_bearer_parsing() {
        assert!(AuthService::bearer_token(&HeaderMap::new()).is_err());

        let mut basic = HeaderMap::new();
        basic.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert!(AuthService::bearer_token(&basic).is_err());

        assert_eq!(AuthService::bearer_token(&bearer("abc")).unwrap(), "abc");
    }

    #[tokio::test]
    async fn test_revoked_token_fails_authentication() {
        let state = state();
        let token = AuthService::issue_token(&state.config, &sample_user(), "user").unwrap();
        let headers = bearer(&token);

        let claims = AuthService::authenticate(&state, &headers).await.unwrap();
        AuthService::logout(&state, &claims).await.unwrap();

        let again = AuthService::authenticate(&state, &headers).await;
        assert!(matches!(again, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_expired_revoked_token_stays_rejected_after_purge() {
        let state = state();
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "7".to_string(),
            email: "ops@example.com".to_string(),
            role: "user".to_string(),
            jti: "expired-jti".to_string(),
            iat: now - 3600,
            exp: now - 30,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(state.config.jwt_secret.as_bytes()),
        )
        .unwrap();
        let headers = bearer(&token);

        state.revocations.revoke("expired-jti", claims.exp).await.unwrap();
        assert!(AuthService::authenticate(&state, &headers).await.is_err());

        // a later revocation purges expired entries
        state.revocations.revoke("other", now + 600).await.unwrap();
        let again = AuthService::authenticate(&state, &headers).await;
        assert!(matches!(again, Err(AppError::Unauthorized(_))));
    }
}
