use crate::impl_unknown_error_trait;
use async_trait::async_trait;
use model::function_environment::FunctionEnvironment;

#[cfg(feature = "test_mocks")]
use mockall::mock;

pub mod functions_repository_impl;

#[derive(Debug, thiserror::Error)]
pub enum FunctionsRepositoryError {
    #[error("{0:#}")]
    Unknown(anyhow::Error),
    #[error("{0}")]
    FunctionNotFound(String),
    #[error("{0}")]
    EnvironmentUnavailable(String),
}

impl_unknown_error_trait!(FunctionsRepositoryError);

/// Read and write access to a managed function's configuration.
#[async_trait]
pub trait FunctionsRepository
where
    Self: Sync + Send,
{
    async fn get_environment(
        &self,
        function_name: String,
    ) -> Result<FunctionEnvironment, FunctionsRepositoryError>;

    /// Replaces the whole environment of the function with `environment`.
    async fn update_environment(
        &self,
        function_name: String,
        environment: FunctionEnvironment,
    ) -> Result<(), FunctionsRepositoryError>;
}

#[cfg(feature = "test_mocks")]
mock! {
    pub FunctionsRepository {}
    #[async_trait]
    impl FunctionsRepository for FunctionsRepository {
        async fn get_environment(
            &self,
            function_name: String,
        ) -> Result<FunctionEnvironment, FunctionsRepositoryError>;

        async fn update_environment(
            &self,
            function_name: String,
            environment: FunctionEnvironment,
        ) -> Result<(), FunctionsRepositoryError>;
    }
}
