pub mod errors;
pub mod event_source_mappings;
pub mod functions;
