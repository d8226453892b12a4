use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use shopdesk_core::{ShopInfo, TokenPair, User};

use crate::error::StoreError;

const ACCESS_TOKEN_FILE: &str = "access_token";
const REFRESH_TOKEN_FILE: &str = "refresh_token";
const USER_FILE: &str = "user.json";
const SHOP_FILE: &str = "shop.json";

/// Durable credential persistence: both tokens, the cached user, and the
/// cached shop record, each in its own file under the profile directory.
///
/// All operations are synchronous. Tokens are opaque strings — no shape or
/// expiry validation happens here, and [`Self::is_authenticated`] is a
/// presence check only: a `true` result is no guarantee the backend will
/// accept the token.
#[derive(Debug)]
pub struct CredentialStore {
    root: PathBuf,
}

impl CredentialStore {
    /// Create a store rooted at `root`. The directory is created lazily on
    /// first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Persist both tokens. Overwrites whatever was stored before.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if either file cannot be written.
    pub fn store_tokens(&self, tokens: &TokenPair) -> Result<(), StoreError> {
        self.write_record(ACCESS_TOKEN_FILE, tokens.access_token.as_bytes())?;
        self.write_record(REFRESH_TOKEN_FILE, tokens.refresh_token.as_bytes())
    }

    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.read_string(ACCESS_TOKEN_FILE)
    }

    #[must_use]
    pub fn refresh_token(&self) -> Option<String> {
        self.read_string(REFRESH_TOKEN_FILE)
    }

    /// Persist the normalized user record as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or the write fails.
    pub fn store_user(&self, user: &User) -> Result<(), StoreError> {
        self.write_json(USER_FILE, "user", user)
    }

    /// Read the cached user. Corrupt or unreadable data is logged and
    /// treated as absent — this must never take the client down.
    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.read_json_tolerant(USER_FILE, "user")
    }

    /// Persist the cached shop record. `None` deletes the record — there is
    /// no empty-object sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization, the write, or the delete
    /// fails.
    pub fn store_shop(&self, shop: Option<&ShopInfo>) -> Result<(), StoreError> {
        match shop {
            Some(shop) => self.write_json(SHOP_FILE, "shop", shop),
            None => self.remove_record(SHOP_FILE),
        }
    }

    /// Read the cached shop. Same corrupt-data tolerance as [`Self::user`].
    #[must_use]
    pub fn shop(&self) -> Option<ShopInfo> {
        self.read_json_tolerant(SHOP_FILE, "shop")
    }

    /// Delete all four credential records. Idempotent — safe to call when
    /// the store is already empty. The tenant context's active-shop-id is a
    /// separate record and is not touched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if a record exists but cannot be removed.
    pub fn clear_all(&self) -> Result<(), StoreError> {
        for name in [ACCESS_TOKEN_FILE, REFRESH_TOKEN_FILE, USER_FILE, SHOP_FILE] {
            self.remove_record(name)?;
        }
        Ok(())
    }

    /// Whether an access token is present. Presence only — no validity or
    /// expiry check.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    // --- Internal accessors ---
    //
    // Reads return `Result` internally and collapse to `Option` at the
    // public boundary, so the "never throws on corrupt state" contract is
    // carried by the types rather than by convention.

    fn try_read_json<T: DeserializeOwned>(
        &self,
        name: &str,
        record: &'static str,
    ) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.read_string(name) else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Corrupt { record, source })
    }

    fn read_json_tolerant<T: DeserializeOwned>(&self, name: &str, record: &'static str) -> Option<T> {
        match self.try_read_json(name, record) {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(%error, record, "discarding unreadable stored record");
                None
            }
        }
    }

    fn read_string(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.record_path(name))
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    fn write_json<T: Serialize>(
        &self,
        name: &str,
        record: &'static str,
        value: &T,
    ) -> Result<(), StoreError> {
        let json =
            serde_json::to_string(value).map_err(|source| StoreError::Serialize { record, source })?;
        self.write_record(name, json.as_bytes())
    }

    fn write_record(&self, name: &str, contents: &[u8]) -> Result<(), StoreError> {
        ensure_private_dir(&self.root)?;
        let path = self.record_path(name);
        fs::write(&path, contents).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600)).map_err(|source| {
                StoreError::Io {
                    path: path.display().to_string(),
                    source,
                }
            })?;
        }

        Ok(())
    }

    fn remove_record(&self, name: &str) -> Result<(), StoreError> {
        let path = self.record_path(name);
        if path.exists() {
            fs::remove_file(&path).map_err(|source| StoreError::Io {
                path: path.display().to_string(),
                source,
            })?;
        }
        Ok(())
    }

    fn record_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

fn ensure_private_dir(dir: &Path) -> Result<(), StoreError> {
    fs::create_dir_all(dir).map_err(|source| StoreError::Io {
        path: dir.display().to_string(),
        source,
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Err(error) = fs::set_permissions(dir, fs::Permissions::from_mode(0o700)) {
            tracing::warn!("failed to chmod 0700 {}: {error}", dir.display());
        }
    }

    Ok(())
}
