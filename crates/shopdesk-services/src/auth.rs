//! Auth endpoint wrappers.
//!
//! Login, registration, logout, token refresh, and the password-reset pair.
//! This module owns the auth wire shapes; callers only ever see the
//! normalized domain types.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shopdesk_client::{ApiClient, ApiError, RequestBody};
use shopdesk_core::{ShopInfo, TokenPair, User, UserWire};

/// Request builders for `/auth/*`.
#[derive(Clone)]
pub struct AuthService {
    client: Arc<ApiClient>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Name for the shop created alongside the account, when the backend
    /// supports registration-time shop creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
}

/// A fully established session, as returned by `/auth/login`.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: User,
    pub shop: Option<ShopInfo>,
    pub tokens: TokenPair,
    /// Advisory token lifetime in seconds. Not enforced client-side.
    pub expires_in: i64,
}

/// Result of `/auth/register`. Tokens are only present when the backend
/// issues them at registration; most deployments require a follow-up login.
#[derive(Debug, Clone)]
pub struct RegisterOutcome {
    pub user: Option<User>,
    pub shop: Option<ShopInfo>,
    pub tokens: Option<TokenPair>,
}

#[derive(Debug, Deserialize)]
struct AuthSessionWire {
    user: UserWire,
    #[serde(default)]
    shop: Option<ShopInfo>,
    access_token: String,
    refresh_token: String,
    #[serde(default)]
    expires_in: i64,
}

impl From<AuthSessionWire> for AuthSession {
    fn from(wire: AuthSessionWire) -> Self {
        Self {
            user: wire.user.into(),
            shop: wire.shop,
            tokens: TokenPair {
                access_token: wire.access_token,
                refresh_token: wire.refresh_token,
            },
            expires_in: wire.expires_in,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RegisterWire {
    #[serde(default)]
    user: Option<UserWire>,
    #[serde(default)]
    shop: Option<ShopInfo>,
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
}

impl From<RegisterWire> for RegisterOutcome {
    fn from(wire: RegisterWire) -> Self {
        let tokens = match (wire.access_token, wire.refresh_token) {
            (Some(access_token), Some(refresh_token)) => Some(TokenPair {
                access_token,
                refresh_token,
            }),
            _ => None,
        };
        Self {
            user: wire.user.map(User::from),
            shop: wire.shop,
            tokens,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RefreshWire {
    access_token: String,
    refresh_token: String,
}

impl AuthService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, rejection, or a malformed
    /// response.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthSession, ApiError> {
        let wire: AuthSessionWire = self
            .client
            .post("/auth/login", RequestBody::try_json(credentials)?)
            .await?;
        Ok(wire.into())
    }

    /// `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, rejection, or a malformed
    /// response.
    pub async fn register(&self, data: &RegisterRequest) -> Result<RegisterOutcome, ApiError> {
        let wire: RegisterWire = self
            .client
            .post("/auth/register", RequestBody::try_json(data)?)
            .await?;
        Ok(wire.into())
    }

    /// `POST /auth/logout`. The backend invalidates the session server-side;
    /// local cleanup is the session store's job, not this call's.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the backend call fails.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let _: serde_json::Value = self.client.post("/auth/logout", RequestBody::Empty).await?;
        Ok(())
    }

    /// `POST /auth/refresh`. Explicit call only — nothing wires this into
    /// 401 handling.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the refresh token is rejected or the call
    /// fails.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, ApiError> {
        let wire: RefreshWire = self
            .client
            .post(
                "/auth/refresh",
                RequestBody::try_json(&serde_json::json!({ "refresh_token": refresh_token }))?,
            )
            .await?;
        Ok(TokenPair {
            access_token: wire.access_token,
            refresh_token: wire.refresh_token,
        })
    }

    /// `POST /auth/forgot-password`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the backend call fails.
    pub async fn forgot_password(&self, data: &ForgotPasswordRequest) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .client
            .post("/auth/forgot-password", RequestBody::try_json(data)?)
            .await?;
        Ok(())
    }

    /// `POST /auth/reset-password`. Does not log the user in.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the backend call fails.
    pub async fn reset_password(&self, data: &ResetPasswordRequest) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .client
            .post("/auth/reset-password", RequestBody::try_json(data)?)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const LOGIN_FIXTURE: &str = r#"{
        "user": {
            "id": "1",
            "email": "a@b.com",
            "first_name": "A",
            "last_name": "B",
            "role": "owner"
        },
        "shop": {"id": "9", "name": "Shop9"},
        "access_token": "tok1",
        "refresh_token": "tok2",
        "expires_in": 3600
    }"#;

    #[test]
    fn login_wire_maps_to_domain_session() {
        let wire: AuthSessionWire = serde_json::from_str(LOGIN_FIXTURE).expect("wire parses");
        let session = AuthSession::from(wire);

        assert_eq!(session.user.first_name, "A");
        assert_eq!(session.user.last_name, "B");
        assert_eq!(
            session.shop,
            Some(ShopInfo {
                id: "9".into(),
                name: "Shop9".into()
            })
        );
        assert_eq!(session.tokens.access_token, "tok1");
        assert_eq!(session.tokens.refresh_token, "tok2");
        assert_eq!(session.expires_in, 3600);
    }

    #[test]
    fn login_wire_tolerates_missing_shop() {
        let wire: AuthSessionWire = serde_json::from_str(
            r#"{
                "user": {"id": 1, "email": "a@b.com", "first_name": "A", "last_name": "B", "role": "owner"},
                "access_token": "tok1",
                "refresh_token": "tok2"
            }"#,
        )
        .expect("wire parses");
        let session = AuthSession::from(wire);
        assert!(session.shop.is_none());
        assert_eq!(session.expires_in, 0);
    }

    #[test]
    fn register_without_tokens_yields_no_token_pair() {
        let wire: RegisterWire = serde_json::from_str(
            r#"{
                "user": {"id": "2", "email": "new@b.com", "first_name": "N", "last_name": "U", "role": "owner"},
                "shop": {"id": "10", "name": "NewShop"}
            }"#,
        )
        .expect("wire parses");
        let outcome = RegisterOutcome::from(wire);
        assert!(outcome.tokens.is_none());
        assert_eq!(outcome.user.expect("user").email, "new@b.com");
        assert_eq!(outcome.shop.expect("shop").name, "NewShop");
    }

    #[test]
    fn register_with_only_one_token_is_treated_as_untokened() {
        let wire: RegisterWire =
            serde_json::from_str(r#"{"access_token": "lonely"}"#).expect("wire parses");
        let outcome = RegisterOutcome::from(wire);
        assert!(outcome.tokens.is_none());
    }
}
