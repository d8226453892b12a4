//! # shopdesk-client
//!
//! The single configured request pipeline for the Shopdesk backend.
//!
//! Every outgoing call gets the cross-cutting concerns applied here, so the
//! per-resource services never repeat them and stay tenant-agnostic:
//!
//! 1. Bearer token from the credential store, when present.
//! 2. Tenant stamping: the active shop id goes into the query string for
//!    `GET` and into the body for `POST`/`PUT`/`PATCH` (all three body
//!    variants). Caller-supplied `shop_id` values always win. Other methods
//!    are never mutated, and an unresolvable tenant id sends the request
//!    unmodified.
//! 3. Response triage: a 401 clears stored credentials and fires the
//!    unauthorized signal before the error reaches the caller; other
//!    non-success statuses surface the backend's message.
//!
//! Navigation is not this layer's concern — the hosting application
//! subscribes to [`ApiClient::subscribe_unauthorized`] and reacts.

mod body;
mod error;
mod http;

pub use body::{MultipartField, MultipartValue, RequestBody, SHOP_ID_FIELD};
pub use error::ApiError;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use shopdesk_config::ShopdeskConfig;
use shopdesk_store::{CredentialStore, TenantContext};
use tokio::sync::watch;

use crate::http::check_response;

/// HTTP client for the Shopdesk backend with auth and tenant interceptors.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: Arc<CredentialStore>,
    tenant: TenantContext,
    unauthorized: watch::Sender<u64>,
}

impl ApiClient {
    /// Build a client from config plus the two shared stores.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` fails
    /// to build.
    pub fn new(
        config: &ShopdeskConfig,
        store: Arc<CredentialStore>,
        tenant: TenantContext,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent("shopdesk/0.1")
            .timeout(Duration::from_secs(config.api.timeout_secs))
            .build()?;

        let (unauthorized, _) = watch::channel(0);

        Ok(Self {
            http,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            store,
            tenant,
            unauthorized,
        })
    }

    /// Subscribe to the unauthorized signal. The value increments every time
    /// a 401 forces a credential wipe; the hosting layer decides what
    /// "redirect to login" means for it.
    #[must_use]
    pub fn subscribe_unauthorized(&self) -> watch::Receiver<u64> {
        self.unauthorized.subscribe()
    }

    /// `GET` with tenant stamping in the query string.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, status, or decode failures.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        self.request(Method::GET, path, query, RequestBody::Empty)
            .await
    }

    /// `POST` with tenant stamping in the body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, status, or decode failures.
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: RequestBody,
    ) -> Result<T, ApiError> {
        self.request(Method::POST, path, &[], body).await
    }

    /// `PUT` with tenant stamping in the body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, status, or decode failures.
    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: RequestBody,
    ) -> Result<T, ApiError> {
        self.request(Method::PUT, path, &[], body).await
    }

    /// `PATCH` with tenant stamping in the body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, status, or decode failures.
    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: RequestBody,
    ) -> Result<T, ApiError> {
        self.request(Method::PATCH, path, &[], body).await
    }

    /// `DELETE`. Never tenant-stamped — only the four methods above are
    /// mutated by the pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, status, or decode failures.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::DELETE, path, &[], RequestBody::Empty)
            .await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: RequestBody,
    ) -> Result<T, ApiError> {
        let value = self.execute(method, path, query, body).await?;
        Ok(shopdesk_core::envelope::into_data(value)?)
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: RequestBody,
    ) -> Result<serde_json::Value, ApiError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let shop_id = self.tenant.shop_id_or_default();

        let mut request = self.http.request(method.clone(), &url);

        if let Some(token) = self.store.access_token() {
            request = request.bearer_auth(token);
        }

        if method == Method::GET {
            request = request.query(&stamp_query(query, shop_id.as_deref()));
        } else if !query.is_empty() {
            request = request.query(query);
        }

        let body = if matches!(method, Method::POST | Method::PUT | Method::PATCH) {
            match shop_id {
                Some(id) => body.with_shop_id(&id),
                None => body,
            }
        } else {
            body
        };

        request = match body {
            RequestBody::Empty => request,
            RequestBody::Json(map) => request.json(&map),
            RequestBody::Multipart(fields) => request.multipart(RequestBody::into_form(fields)),
        };

        let response = request.send().await?;

        let response = match check_response(response).await {
            Ok(response) => response,
            Err(error) => {
                if matches!(error, ApiError::Unauthorized { .. }) {
                    self.handle_unauthorized();
                }
                return Err(error);
            }
        };

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&text).map_err(|error| ApiError::Decode(error.to_string()))
    }

    /// 401 side effects: wipe stored credentials, then notify subscribers.
    /// The error itself still propagates to the original caller.
    fn handle_unauthorized(&self) {
        if let Err(error) = self.store.clear_all() {
            tracing::warn!(%error, "failed to clear credentials after 401");
        }
        self.unauthorized.send_modify(|generation| *generation += 1);
        tracing::warn!("session rejected by backend — credentials cleared");
    }
}

/// Tenant stamping for `GET` query strings. An explicit caller-supplied
/// `shop_id` always wins.
fn stamp_query(query: &[(&str, &str)], shop_id: Option<&str>) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = query
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect();

    if let Some(id) = shop_id {
        if !pairs.iter().any(|(key, _)| key == SHOP_ID_FIELD) {
            pairs.push((SHOP_ID_FIELD.to_string(), id.to_string()));
        }
    }

    pairs
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn stamp_query_appends_when_absent() {
        let pairs = stamp_query(&[("page", "2")], Some("9"));
        assert_eq!(
            pairs,
            vec![
                ("page".to_string(), "2".to_string()),
                ("shop_id".to_string(), "9".to_string()),
            ]
        );
    }

    #[test]
    fn stamp_query_keeps_caller_value() {
        let pairs = stamp_query(&[("shop_id", "explicit")], Some("9"));
        assert_eq!(pairs, vec![("shop_id".to_string(), "explicit".to_string())]);
    }

    #[test]
    fn stamp_query_without_tenant_leaves_query_alone() {
        let pairs = stamp_query(&[("page", "2")], None);
        assert_eq!(pairs, vec![("page".to_string(), "2".to_string())]);
    }

    #[test]
    fn stamp_query_with_no_params_and_tenant_is_discriminator_only() {
        let pairs = stamp_query(&[], Some("9"));
        assert_eq!(pairs, vec![("shop_id".to_string(), "9".to_string())]);
    }

    #[test]
    fn client_builds_from_default_config() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let config = ShopdeskConfig::default();
        let store = Arc::new(CredentialStore::new(tmp.path()));
        let tenant = TenantContext::new(tmp.path(), None);

        let client = ApiClient::new(&config, store, tenant).expect("client builds");
        assert_eq!(client.base_url, "http://localhost:3000/api");
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let mut config = ShopdeskConfig::default();
        config.api.base_url = "http://localhost:3000/api/".into();
        let store = Arc::new(CredentialStore::new(tmp.path()));
        let tenant = TenantContext::new(tmp.path(), None);

        let client = ApiClient::new(&config, store, tenant).expect("client builds");
        assert_eq!(client.base_url, "http://localhost:3000/api");
    }
}
