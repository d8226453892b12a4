//! # shopdesk-core
//!
//! Shared types for the Shopdesk client workspace:
//! - Domain identity structs (`User`, `ShopInfo`, `TokenPair`)
//! - Backend wire shapes (snake_case) and their conversions into the
//!   normalized domain shape
//! - Response envelope normalization for the backend's inconsistent
//!   `{success, data}` / `{status, data}` / bare-payload conventions

pub mod envelope;
pub mod identity;

pub use envelope::EnvelopeError;
pub use identity::{ShopInfo, TokenPair, User, UserWire};
