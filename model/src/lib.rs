pub mod event_source_mapping;
pub mod function_environment;
