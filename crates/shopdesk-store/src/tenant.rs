use std::fs;
use std::path::PathBuf;

use crate::error::StoreError;

const SHOP_ID_FILE: &str = "shop_id";

/// Single source of truth for "which shop am I operating as".
///
/// Holds the persisted active-shop-id scalar, read by the request pipeline
/// on every outgoing call. Decoupled from which user is logged in and from
/// the credential store's cached `shop` record — the two are written by
/// different flows and may legitimately diverge.
#[derive(Debug, Clone)]
pub struct TenantContext {
    root: PathBuf,
    default_shop_id: Option<String>,
}

impl TenantContext {
    /// Create a context rooted at `root`, with an optional configured
    /// fallback id (see `tenant.default_shop_id` in the config).
    pub fn new(root: impl Into<PathBuf>, default_shop_id: Option<String>) -> Self {
        Self {
            root: root.into(),
            default_shop_id,
        }
    }

    /// The persisted active shop id, if one has been selected.
    ///
    /// Logs a warning when unset so unstamped request batches are visible in
    /// the logs.
    #[must_use]
    pub fn current_shop_id(&self) -> Option<String> {
        let id = fs::read_to_string(self.path())
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        if id.is_none() {
            tracing::warn!("no active shop selected — requests will not carry a shop id");
        }
        id
    }

    /// Persist a new active shop id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyShopId`] for empty input and
    /// [`StoreError::Io`] if the write fails.
    pub fn set_current_shop_id(&self, id: &str) -> Result<(), StoreError> {
        let id = id.trim();
        if id.is_empty() {
            tracing::error!("refusing to set an empty shop id");
            return Err(StoreError::EmptyShopId);
        }

        fs::create_dir_all(&self.root).map_err(|source| StoreError::Io {
            path: self.root.display().to_string(),
            source,
        })?;
        let path = self.path();
        fs::write(&path, id).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    /// Forget the active shop. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the record exists but cannot be removed.
    pub fn clear_current_shop_id(&self) -> Result<(), StoreError> {
        let path = self.path();
        if path.exists() {
            fs::remove_file(&path).map_err(|source| StoreError::Io {
                path: path.display().to_string(),
                source,
            })?;
        }
        Ok(())
    }

    /// The active shop id, falling back to the configured default. `None`
    /// when neither is set — callers then send the request unstamped.
    #[must_use]
    pub fn shop_id_or_default(&self) -> Option<String> {
        self.current_shop_id().or_else(|| self.default_shop_id.clone())
    }

    fn path(&self) -> PathBuf {
        self.root.join(SHOP_ID_FILE)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn tenant(default: Option<&str>) -> (tempfile::TempDir, TenantContext) {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let ctx = TenantContext::new(tmp.path(), default.map(str::to_string));
        (tmp, ctx)
    }

    #[test]
    fn set_get_clear_cycle() {
        let (_tmp, ctx) = tenant(None);
        assert!(ctx.current_shop_id().is_none());

        ctx.set_current_shop_id("9").expect("set");
        assert_eq!(ctx.current_shop_id().as_deref(), Some("9"));

        ctx.clear_current_shop_id().expect("clear");
        assert!(ctx.current_shop_id().is_none());
        ctx.clear_current_shop_id().expect("clear again");
    }

    #[test]
    fn empty_shop_id_is_rejected() {
        let (_tmp, ctx) = tenant(None);
        let err = ctx.set_current_shop_id("   ").expect_err("should reject");
        assert!(matches!(err, StoreError::EmptyShopId));
        assert!(ctx.current_shop_id().is_none());
    }

    #[test]
    fn configured_default_fills_in_when_unset() {
        let (_tmp, ctx) = tenant(Some("1"));
        assert!(ctx.current_shop_id().is_none());
        assert_eq!(ctx.shop_id_or_default().as_deref(), Some("1"));
    }

    #[test]
    fn selected_shop_beats_configured_default() {
        let (_tmp, ctx) = tenant(Some("1"));
        ctx.set_current_shop_id("42").expect("set");
        assert_eq!(ctx.shop_id_or_default().as_deref(), Some("42"));
    }

    #[test]
    fn no_selection_and_no_default_means_none() {
        let (_tmp, ctx) = tenant(None);
        assert!(ctx.shop_id_or_default().is_none());
    }

    #[test]
    fn clearing_tenant_does_not_touch_credentials() {
        let (tmp, ctx) = tenant(None);
        let creds = crate::CredentialStore::new(tmp.path());
        creds
            .store_tokens(&shopdesk_core::TokenPair {
                access_token: "tok".into(),
                refresh_token: "ref".into(),
            })
            .expect("store");

        ctx.set_current_shop_id("5").expect("set");
        ctx.clear_current_shop_id().expect("clear");

        assert!(creds.is_authenticated());
    }
}
