//! Keeps the backfill function pointed at the restored table and subscribed to the buffer queue.

pub mod mapping_reconciler;

pub use mapping_reconciler::MappingReconciler;

use repositories::event_source_mappings::EventSourceMappingsRepositoryError;
use repositories::functions::FunctionsRepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum ReconciliationError {
    #[error("Unable to point function {function_name} at its new destination: {source}")]
    DestinationUpdate {
        function_name: String,
        #[source]
        source: FunctionsRepositoryError,
    },
    #[error("Unable to reconcile event source mapping: {0}")]
    Mapping(#[from] EventSourceMappingsRepositoryError),
}

/// What `reconcile_mapping` did to converge the platform state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingOutcome {
    Created { uuid: String },
    Updated { uuid: String },
}
