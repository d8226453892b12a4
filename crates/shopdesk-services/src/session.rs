//! Observable session state machine.
//!
//! [`SessionStore`] is the only writer of the credential store besides the
//! client's 401 handler. It is constructed synchronously from persisted
//! state (no network call) and mutated exclusively through the five named
//! transitions: login, register, logout, forgot-password, reset-password.
//!
//! Transitions are serialized with an async mutex, so two concurrent
//! transitions cannot interleave their store writes — in particular a
//! `logout` racing a `login` resolves to whichever ran second, with no torn
//! state in between.

use shopdesk_client::ApiError;
use shopdesk_core::{ShopInfo, User};
use shopdesk_store::{CredentialStore, StoreError};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, watch};

use crate::auth::{
    AuthService, ForgotPasswordRequest, LoginRequest, RegisterRequest, ResetPasswordRequest,
};

/// In-memory session snapshot. Derived from the credential store, never
/// persisted directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub shop: Option<ShopInfo>,
    /// Invariant: equals `user.is_some()` after any completed transition.
    pub is_authenticated: bool,
    /// True only while a transition's network call is in flight.
    pub is_loading: bool,
    /// Last failure message, cleared at the start of every transition.
    pub error: Option<String>,
}

impl SessionState {
    fn logged_out() -> Self {
        Self {
            user: None,
            shop: None,
            is_authenticated: false,
            is_loading: false,
            error: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Auth state container driving UI gating.
pub struct SessionStore {
    state: watch::Sender<SessionState>,
    store: Arc<CredentialStore>,
    auth: AuthService,
    /// Serializes transitions; see module docs.
    transition: Mutex<()>,
}

impl SessionStore {
    /// Rehydrate from the credential store. Synchronous — no network.
    ///
    /// `is_authenticated` requires both a stored token and a readable user
    /// record, so a corrupt user file hydrates as anonymous rather than as a
    /// half-authenticated session.
    #[must_use]
    pub fn new(store: Arc<CredentialStore>, auth: AuthService) -> Self {
        let user = store.user();
        let initial = SessionState {
            is_authenticated: user.is_some() && store.is_authenticated(),
            shop: store.shop(),
            user,
            is_loading: false,
            error: None,
        };
        let (state, _) = watch::channel(initial);

        Self {
            state,
            store,
            auth,
            transition: Mutex::new(()),
        }
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Observe state changes (each transition publishes at least twice:
    /// loading start and settlement).
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Log in and persist the issued credentials.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] on rejection, transport failure, or a
    /// persistence failure. On error the session stays unauthenticated and
    /// `error` carries the backend message.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<(), SessionError> {
        let _guard = self.transition.lock().await;
        self.begin();

        let session = match self.auth.login(credentials).await {
            Ok(session) => session,
            Err(error) => return Err(self.fail(error.into())),
        };

        let persisted = self
            .store
            .store_tokens(&session.tokens)
            .and_then(|()| self.store.store_user(&session.user))
            .and_then(|()| self.store.store_shop(session.shop.as_ref()));
        if let Err(error) = persisted {
            return Err(self.fail(error.into()));
        }

        self.state.send_modify(|state| {
            state.user = Some(session.user.clone());
            state.shop = session.shop.clone();
            state.is_authenticated = true;
            state.is_loading = false;
            state.error = None;
        });
        Ok(())
    }

    /// Register a new account. Never authenticates by itself: tokens are
    /// persisted when the backend issues them, but a login is still required
    /// to establish the session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] on rejection, transport failure, or a
    /// persistence failure.
    pub async fn register(&self, data: &RegisterRequest) -> Result<(), SessionError> {
        let _guard = self.transition.lock().await;
        self.begin();

        let outcome = match self.auth.register(data).await {
            Ok(outcome) => outcome,
            Err(error) => return Err(self.fail(error.into())),
        };

        if let Some(tokens) = &outcome.tokens {
            let persisted = self.store.store_tokens(tokens).and_then(|()| {
                outcome
                    .user
                    .as_ref()
                    .map_or(Ok(()), |user| self.store.store_user(user))
            });
            if let Err(error) = persisted {
                return Err(self.fail(error.into()));
            }
        }

        self.state.send_modify(|state| {
            if outcome.shop.is_some() {
                state.shop = outcome.shop.clone();
            }
            state.is_loading = false;
            state.error = None;
        });
        Ok(())
    }

    /// Log out. The backend call is best-effort: whatever it does, local
    /// credentials are cleared and the session resets to the logged-out
    /// shape. A failed network call must never leave the client looking
    /// authenticated.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] only if local cleanup itself fails —
    /// the in-memory session is reset even then.
    pub async fn logout(&self) -> Result<(), SessionError> {
        let _guard = self.transition.lock().await;
        self.begin();

        if let Err(error) = self.auth.logout().await {
            tracing::warn!(%error, "backend logout failed; clearing local session anyway");
        }

        let cleared = self.store.clear_all();
        self.state.send_modify(|state| *state = SessionState::logged_out());
        cleared.map_err(SessionError::from)
    }

    /// Request a password-reset email. No user/shop state changes.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Api`] if the backend call fails.
    pub async fn forgot_password(&self, data: &ForgotPasswordRequest) -> Result<(), SessionError> {
        let _guard = self.transition.lock().await;
        self.begin();

        match self.auth.forgot_password(data).await {
            Ok(()) => {
                self.settle_ok();
                Ok(())
            }
            Err(error) => Err(self.fail(error.into())),
        }
    }

    /// Complete a password reset. No automatic login afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Api`] if the backend call fails.
    pub async fn reset_password(&self, data: &ResetPasswordRequest) -> Result<(), SessionError> {
        let _guard = self.transition.lock().await;
        self.begin();

        match self.auth.reset_password(data).await {
            Ok(()) => {
                self.settle_ok();
                Ok(())
            }
            Err(error) => Err(self.fail(error.into())),
        }
    }

    /// Start of every transition: loading on, previous error cleared.
    fn begin(&self) {
        self.state.send_modify(|state| {
            state.is_loading = true;
            state.error = None;
        });
    }

    fn settle_ok(&self) {
        self.state.send_modify(|state| {
            state.is_loading = false;
            state.error = None;
        });
    }

    /// Record a failed transition: only `error` and `is_loading` change.
    fn fail(&self, error: SessionError) -> SessionError {
        let message = failure_message(&error);
        self.state.send_modify(|state| {
            state.is_loading = false;
            state.error = Some(message.clone());
        });
        error
    }
}

/// Backend messages go into `error` verbatim — no client-side rewording of
/// validation or business failures.
fn failure_message(error: &SessionError) -> String {
    match error {
        SessionError::Api(
            ApiError::Api { message, .. }
            | ApiError::Backend { message }
            | ApiError::Unauthorized { message },
        ) => message.clone(),
        other => other.to_string(),
    }
}
