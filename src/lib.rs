pub mod config;
pub mod lambda_structure;
pub mod reconciliation;
pub mod result;
