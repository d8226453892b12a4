pub mod auth;
pub mod resources;
pub mod shop;
