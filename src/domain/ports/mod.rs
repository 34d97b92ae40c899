pub mod auth_gateway;
pub mod client_store;
pub mod dashboard_source;
pub mod unauthorized;
