//! # shopdesk-store
//!
//! Durable, synchronous, file-backed persistence for the Shopdesk client:
//!
//! - [`CredentialStore`] — access/refresh tokens plus cached user and shop
//!   records, five independent files under an explicitly constructed profile
//!   directory (default `~/.shopdesk`).
//! - [`TenantContext`] — the active-shop-id scalar stamped onto outgoing
//!   requests, deliberately independent of the credential store's `shop`
//!   record.
//!
//! Corrupt persisted state is never an error to callers: getters collapse to
//! `None` and log, so the client can never crash on a bad profile directory.

mod credentials;
mod error;
mod tenant;

pub use credentials::CredentialStore;
pub use error::StoreError;
pub use tenant::TenantContext;

use std::path::PathBuf;

/// Default profile directory: `~/.shopdesk`.
///
/// # Errors
///
/// Returns [`StoreError::NoHomeDir`] if the home directory cannot be
/// resolved.
pub fn default_profile_dir() -> Result<PathBuf, StoreError> {
    dirs::home_dir()
        .map(|home| home.join(".shopdesk"))
        .ok_or(StoreError::NoHomeDir)
}
