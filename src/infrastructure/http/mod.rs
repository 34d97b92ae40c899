pub mod gateway;
pub mod retry;
