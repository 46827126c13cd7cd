use async_trait::async_trait;
use common::config::ConfigLoader;
use lambda_runtime::{Error, LambdaEvent};
use serde::{de::DeserializeOwned, Serialize};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::prelude::*;

use crate::config::GlobalConfig;

#[async_trait]
pub trait Lambda {
    type PersistedMemory: Sync + Send;
    type InputBody: DeserializeOwned + Send + Sync + std::fmt::Debug;
    type Output: Serialize + Send + Sync;
    type Error: Into<Error> + std::error::Error + Sync + Send + 'static;

    /// Builds the clients and configuration shared by every invocation served by this process.
    async fn bootstrap() -> Result<Self::PersistedMemory, Self::Error>;

    /// Business logic of the lambda.
    async fn run(
        payload: Self::InputBody,
        connections: &Self::PersistedMemory,
    ) -> Result<Self::Output, Self::Error>;

    /// Sets up logging, bootstraps the persisted state once and starts serving invocations.
    /// Call this from the top-level main function of a given lambda.
    async fn main() -> Result<(), Error> {
        LogTracer::init()?;

        let global_config = ConfigLoader::load_default::<GlobalConfig>().await?;
        let level = global_config.level_filter();

        let app_name = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION")).to_string();
        let (non_blocking_writer, _guard) = tracing_appender::non_blocking(std::io::stdout());
        let bunyan_formatting_layer = BunyanFormattingLayer::new(app_name, non_blocking_writer);

        tracing_subscriber::registry()
            .with(level)
            .with(JsonStorageLayer)
            .with(bunyan_formatting_layer)
            .init();

        // A failed bootstrap fails the process start, before any event is accepted.
        let persisted = &Self::bootstrap().await.map_err(|e| {
            tracing::error!(error = ?e, "Bootstrap failed: {e}");
            e
        })?;

        let service = move |event: LambdaEvent<Self::InputBody>| async move {
            Self::service(event, persisted).await
        };

        lambda_runtime::run(lambda_runtime::service_fn(service)).await
    }

    /// Called on every invocation. Logs the incoming event before handing it to `run`.
    async fn service(
        event: LambdaEvent<Self::InputBody>,
        connections: &Self::PersistedMemory,
    ) -> Result<Self::Output, Self::Error> {
        let LambdaEvent { payload, context } = event;

        tracing::info!(payload = ?payload, context = ?context, "Execution started");

        Self::run(payload, connections).await.map_err(|e| {
            tracing::error!(error = ?e, "Execution failed: {e}");
            e
        })
    }
}

#[macro_export]
macro_rules! lambda_main {
    ($lambda: ty) => {
        #[tokio::main]
        async fn main() -> $crate::result::error::LambdaRuntimeResult {
            use $crate::lambda_structure::lambda_trait::Lambda;
            <$lambda>::main().await
        }
    };
}
