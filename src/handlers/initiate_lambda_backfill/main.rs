mod config;
mod dtos;

use crate::config::Config;
use anyhow::anyhow;
use async_trait::async_trait;
use common::aws_clients::lambda::get_lambda_client;
use common::config::aws_client_config::AwsClientConfig;
use common::config::ConfigLoader;
use dtos::RestoreTableEvent;
use pitr_restore_backfill::reconciliation::MappingReconciler;
use pitr_restore_backfill::{
    lambda_main, lambda_structure::lambda_trait::Lambda, result::error::LambdaError,
};
use repositories::event_source_mappings::event_source_mappings_repository_impl::EventSourceMappingsRepositoryImpl;
use repositories::functions::functions_repository_impl::FunctionsRepositoryImpl;
use std::sync::Arc;
use validator::Validate;

pub struct Persisted {
    pub reconciler: MappingReconciler,
}

pub struct InitiateLambdaBackfill;

#[async_trait]
impl Lambda for InitiateLambdaBackfill {
    type PersistedMemory = Persisted;
    type InputBody = RestoreTableEvent;
    type Output = ();
    type Error = LambdaError;

    async fn bootstrap() -> Result<Self::PersistedMemory, Self::Error> {
        let config = ConfigLoader::load_default::<Config>().await?;
        let aws_client_config = ConfigLoader::load_default::<AwsClientConfig>().await?;
        let lambda_client = get_lambda_client(&aws_client_config)
            .map_err(|e| LambdaError::Unknown(anyhow!(e).context("Unable to build Lambda client")))?;

        let reconciler = MappingReconciler::new(
            config.into(),
            Arc::new(FunctionsRepositoryImpl::new(lambda_client.clone())),
            Arc::new(EventSourceMappingsRepositoryImpl::new(lambda_client)),
        );

        Ok(Persisted { reconciler })
    }

    async fn run(
        request: Self::InputBody,
        state: &Self::PersistedMemory,
    ) -> Result<Self::Output, Self::Error> {
        request.detail.request_parameters.validate()?;

        tracing::info!(
            detail = ?request.detail,
            function_name = %state.reconciler.target().function_name,
            "Restore of {:?} into {} detected",
            request.detail.request_parameters.source_table_name,
            request.detail.request_parameters.target_table_name
        );

        state
            .reconciler
            .handle(request.detail.request_parameters.target_table_name)
            .await?;

        Ok(())
    }
}

lambda_main!(InitiateLambdaBackfill);
