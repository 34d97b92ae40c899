pub mod auth;
pub mod guard;
pub mod preferences;
pub mod session;
