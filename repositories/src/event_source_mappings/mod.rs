use crate::impl_unknown_error_trait;
use async_trait::async_trait;
use model::event_source_mapping::{BatchingSettings, EventSourceMapping, MappingTarget};

#[cfg(feature = "test_mocks")]
use mockall::mock;

pub mod event_source_mappings_repository_impl;

#[derive(Debug, thiserror::Error)]
pub enum EventSourceMappingsRepositoryError {
    #[error("{0:#}")]
    Unknown(anyhow::Error),
    #[error("{0}")]
    MappingNotFound(String),
    #[error("{0}")]
    MalformedMapping(String),
}

impl_unknown_error_trait!(EventSourceMappingsRepositoryError);

#[async_trait]
pub trait EventSourceMappingsRepository
where
    Self: Sync + Send,
{
    /// Every mapping between the target's event source and function, across all result pages.
    async fn list_mappings(
        &self,
        target: MappingTarget,
    ) -> Result<Vec<EventSourceMapping>, EventSourceMappingsRepositoryError>;

    async fn update_mapping(
        &self,
        uuid: String,
        settings: BatchingSettings,
    ) -> Result<EventSourceMapping, EventSourceMappingsRepositoryError>;

    async fn create_mapping(
        &self,
        target: MappingTarget,
        settings: BatchingSettings,
    ) -> Result<EventSourceMapping, EventSourceMappingsRepositoryError>;
}

#[cfg(feature = "test_mocks")]
mock! {
    pub EventSourceMappingsRepository {}
    #[async_trait]
    impl EventSourceMappingsRepository for EventSourceMappingsRepository {
        async fn list_mappings(
            &self,
            target: MappingTarget,
        ) -> Result<Vec<EventSourceMapping>, EventSourceMappingsRepositoryError>;

        async fn update_mapping(
            &self,
            uuid: String,
            settings: BatchingSettings,
        ) -> Result<EventSourceMapping, EventSourceMappingsRepositoryError>;

        async fn create_mapping(
            &self,
            target: MappingTarget,
            settings: BatchingSettings,
        ) -> Result<EventSourceMapping, EventSourceMappingsRepositoryError>;
    }
}
