use async_trait::async_trait;
use model::event_source_mapping::{
    BatchingSettings, EventSourceMapping, EventSourceMappingState, MappingTarget,
};
use rusoto_core::RusotoError;
use rusoto_lambda::{
    CreateEventSourceMappingRequest, EventSourceMappingConfiguration, Lambda,
    ListEventSourceMappingsRequest, UpdateEventSourceMappingError,
    UpdateEventSourceMappingRequest,
};

use super::{EventSourceMappingsRepository, EventSourceMappingsRepositoryError};
use crate::errors::UnknownError;

pub struct EventSourceMappingsRepositoryImpl<T: Lambda + Sync + Send> {
    lambda_client: T,
}

impl<T: Lambda + Sync + Send> EventSourceMappingsRepositoryImpl<T> {
    pub fn new(lambda_client: T) -> Self {
        Self { lambda_client }
    }
}

fn to_event_source_mapping(
    configuration: EventSourceMappingConfiguration,
) -> Result<EventSourceMapping, EventSourceMappingsRepositoryError> {
    let uuid = configuration.uuid.ok_or_else(|| {
        EventSourceMappingsRepositoryError::MalformedMapping(format!(
            "Event source mapping without UUID for source {:?}",
            configuration.event_source_arn
        ))
    })?;

    Ok(EventSourceMapping {
        uuid,
        event_source_arn: configuration.event_source_arn,
        function_arn: configuration.function_arn,
        state: configuration
            .state
            .as_deref()
            .map(EventSourceMappingState::from),
        batch_size: configuration.batch_size,
        maximum_batching_window_in_seconds: configuration.maximum_batching_window_in_seconds,
    })
}

#[async_trait]
impl<T: Lambda + Sync + Send> EventSourceMappingsRepository
    for EventSourceMappingsRepositoryImpl<T>
{
    async fn list_mappings(
        &self,
        target: MappingTarget,
    ) -> Result<Vec<EventSourceMapping>, EventSourceMappingsRepositoryError> {
        let mut mappings = Vec::new();
        let mut marker: Option<String> = None;

        loop {
            let input = ListEventSourceMappingsRequest {
                event_source_arn: Some(target.event_source_arn.clone()),
                function_name: Some(target.function_name.clone()),
                marker: marker.take(),
                ..ListEventSourceMappingsRequest::default()
            };

            let page = self
                .lambda_client
                .list_event_source_mappings(input)
                .await
                .map_err(|e| {
                    EventSourceMappingsRepositoryError::unknown(
                        e,
                        Some(format!(
                            "Error listing event source mappings from {} to {}",
                            target.event_source_arn, target.function_name
                        )),
                    )
                })?;

            for configuration in page.event_source_mappings.unwrap_or_default() {
                mappings.push(to_event_source_mapping(configuration)?);
            }

            match page.next_marker {
                Some(next) if !next.is_empty() => marker = Some(next),
                _ => break,
            }
        }

        Ok(mappings)
    }

    async fn update_mapping(
        &self,
        uuid: String,
        settings: BatchingSettings,
    ) -> Result<EventSourceMapping, EventSourceMappingsRepositoryError> {
        let input = UpdateEventSourceMappingRequest {
            uuid: uuid.clone(),
            enabled: Some(settings.enabled),
            batch_size: Some(settings.batch_size),
            maximum_batching_window_in_seconds: Some(
                settings.maximum_batching_window_in_seconds(),
            ),
            ..UpdateEventSourceMappingRequest::default()
        };

        let configuration = self
            .lambda_client
            .update_event_source_mapping(input)
            .await
            .map_err(|e| match e {
                RusotoError::Service(UpdateEventSourceMappingError::ResourceNotFound(message)) => {
                    EventSourceMappingsRepositoryError::MappingNotFound(format!(
                        "Event source mapping {uuid} not found: {message}"
                    ))
                }
                other => EventSourceMappingsRepositoryError::unknown(
                    other,
                    Some(format!("Error updating event source mapping {uuid}")),
                ),
            })?;

        to_event_source_mapping(configuration)
    }

    async fn create_mapping(
        &self,
        target: MappingTarget,
        settings: BatchingSettings,
    ) -> Result<EventSourceMapping, EventSourceMappingsRepositoryError> {
        let input = CreateEventSourceMappingRequest {
            event_source_arn: Some(target.event_source_arn.clone()),
            function_name: target.function_name.clone(),
            enabled: Some(settings.enabled),
            batch_size: Some(settings.batch_size),
            maximum_batching_window_in_seconds: Some(
                settings.maximum_batching_window_in_seconds(),
            ),
            ..CreateEventSourceMappingRequest::default()
        };

        let configuration = self
            .lambda_client
            .create_event_source_mapping(input)
            .await
            .map_err(|e| {
                EventSourceMappingsRepositoryError::unknown(
                    e,
                    Some(format!(
                        "Error creating event source mapping from {} to {}",
                        target.event_source_arn, target.function_name
                    )),
                )
            })?;

        to_event_source_mapping(configuration)
    }
}
