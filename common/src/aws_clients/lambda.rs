use crate::config::aws_client_config::AwsClientConfig;
use rusoto_core::credential::EnvironmentProvider;
use rusoto_core::request::TlsError;
use rusoto_lambda::LambdaClient;

/// Builds the Lambda control-plane client. Credentials are read from the environment, which is
/// where the execution role's session credentials live inside a deployed function.
pub fn get_lambda_client(config: &AwsClientConfig) -> Result<LambdaClient, TlsError> {
    let request_dispatcher = rusoto_core::request::HttpClient::new()?;

    Ok(LambdaClient::new_with(
        request_dispatcher,
        EnvironmentProvider::default(),
        config.region(),
    ))
}
