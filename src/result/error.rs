//! `LambdaError` is the error every invocation of the handler can fail with.
//! Errors raised by the repositories and the reconciler are mapped to it.

use crate::reconciliation::ReconciliationError;
use common::config::ConfigLoaderError;
use lambda_runtime::Error as LambdaRuntimeError;
use validator::ValidationErrors;

pub type LambdaRuntimeResult = std::result::Result<(), LambdaRuntimeError>;

#[derive(Debug, thiserror::Error)]
pub enum LambdaError {
    #[error("{0:#}")]
    Unknown(#[source] anyhow::Error),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Configuration(String),
}

impl From<ValidationErrors> for LambdaError {
    fn from(e: ValidationErrors) -> Self {
        LambdaError::Validation(format!("{e:#}"))
    }
}

impl From<ConfigLoaderError> for LambdaError {
    fn from(e: ConfigLoaderError) -> Self {
        LambdaError::Configuration(e.to_string())
    }
}

impl From<ReconciliationError> for LambdaError {
    fn from(e: ReconciliationError) -> Self {
        LambdaError::Unknown(anyhow::anyhow!(e))
    }
}
