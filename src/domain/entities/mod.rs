pub mod alert;
pub mod auth;
pub mod edge;
pub mod overview;
pub mod shadow_boxing;
pub mod site;
pub mod slump;
pub mod trades;
