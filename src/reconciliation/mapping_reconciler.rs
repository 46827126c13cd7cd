use std::sync::Arc;

use model::event_source_mapping::{BatchingSettings, MappingTarget};
use repositories::event_source_mappings::EventSourceMappingsRepository;
use repositories::functions::FunctionsRepository;

use super::{MappingOutcome, ReconciliationError};

type FunctionsRepositoryObject = Arc<dyn FunctionsRepository>;
type EventSourceMappingsRepositoryObject = Arc<dyn EventSourceMappingsRepository>;

/// Points the backfill function at a destination table and makes sure exactly one enabled
/// trigger connects the buffer queue to it.
///
/// Two failure policies apply. Updating the destination is fail-fast: its error is returned and
/// nothing else runs. Reconciling the mapping is fail-soft: its error is logged and dropped.
pub struct MappingReconciler {
    target: MappingTarget,
    settings: BatchingSettings,
    functions_repository: FunctionsRepositoryObject,
    mappings_repository: EventSourceMappingsRepositoryObject,
}

impl MappingReconciler {
    pub fn new(
        target: MappingTarget,
        functions_repository: FunctionsRepositoryObject,
        mappings_repository: EventSourceMappingsRepositoryObject,
    ) -> Self {
        Self {
            target,
            settings: BatchingSettings::default(),
            functions_repository,
            mappings_repository,
        }
    }

    pub fn target(&self) -> &MappingTarget {
        &self.target
    }

    pub async fn handle(&self, destination_table: String) -> Result<(), ReconciliationError> {
        self.update_destination(destination_table).await?;
        self.reconcile_mapping().await;
        Ok(())
    }

    /// Sets `destination_table` on the function. The current environment is read first and
    /// written back whole, so unrelated variables survive.
    pub async fn update_destination(
        &self,
        destination_table: String,
    ) -> Result<(), ReconciliationError> {
        let function_name = self.target.function_name.clone();
        let to_reconciliation_error = |source| ReconciliationError::DestinationUpdate {
            function_name: function_name.clone(),
            source,
        };

        let current = self
            .functions_repository
            .get_environment(function_name.clone())
            .await
            .map_err(to_reconciliation_error)?;

        let previous_table = current.destination_table().map(str::to_owned);
        let updated = current.with_destination_table(destination_table.clone());

        self.functions_repository
            .update_environment(function_name.clone(), updated)
            .await
            .map_err(to_reconciliation_error)?;

        tracing::info!(
            function_name = %function_name,
            previous_table = ?previous_table,
            destination_table = %destination_table,
            "Updated destination table of function {}",
            function_name
        );

        Ok(())
    }

    /// Converges the platform to one enabled mapping between the target's queue and function.
    /// Never fails: errors are logged and `None` is returned.
    pub async fn reconcile_mapping(&self) -> Option<MappingOutcome> {
        match self.try_reconcile_mapping().await {
            Ok(outcome) => {
                tracing::info!(outcome = ?outcome, "Event source mapping reconciled");
                Some(outcome)
            }
            Err(e) => {
                tracing::error!(
                    error = ?e,
                    event_source_arn = %self.target.event_source_arn,
                    function_name = %self.target.function_name,
                    "{e}"
                );
                None
            }
        }
    }

    async fn try_reconcile_mapping(&self) -> Result<MappingOutcome, ReconciliationError> {
        let existing = self
            .mappings_repository
            .list_mappings(self.target.clone())
            .await?;

        tracing::info!(mappings = ?existing, "Existing event source mappings");

        let mut existing = existing.into_iter();
        let Some(first) = existing.next() else {
            let created = self
                .mappings_repository
                .create_mapping(self.target.clone(), self.settings)
                .await?;
            return Ok(MappingOutcome::Created { uuid: created.uuid });
        };

        // Duplicates come from concurrent invocations racing between list and create.
        let duplicates: Vec<String> = existing.map(|mapping| mapping.uuid).collect();
        if !duplicates.is_empty() {
            tracing::warn!(
                kept = %first.uuid,
                duplicates = ?duplicates,
                "More than one event source mapping from {} to {}",
                self.target.event_source_arn,
                self.target.function_name
            );
        }

        let updated = self
            .mappings_repository
            .update_mapping(first.uuid, self.settings)
            .await?;

        Ok(MappingOutcome::Updated { uuid: updated.uuid })
    }
}
