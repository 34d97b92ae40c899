pub mod activation_status;
pub mod bql_state;
pub mod edge_class;
pub mod session_state;
