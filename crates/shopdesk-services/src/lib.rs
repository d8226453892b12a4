//! # shopdesk-services
//!
//! Thin per-resource request builders over [`shopdesk_client::ApiClient`],
//! plus the observable session state machine.
//!
//! Services are deliberately tenant-agnostic: the client pipeline stamps the
//! active shop id onto every request, so no module here ever mentions
//! multi-tenancy. Wire shapes (snake_case backend JSON) are converted into
//! frontend-shaped records at this boundary and nowhere above it.

pub mod auth;
pub mod categories;
pub mod customers;
pub mod feedback;
pub mod orders;
pub mod products;
pub mod session;
pub mod shops;
pub mod units;

pub use auth::AuthService;
pub use session::{SessionError, SessionState, SessionStore};
