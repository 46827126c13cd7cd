use async_trait::async_trait;
use model::function_environment::FunctionEnvironment;
use rusoto_core::RusotoError;
use rusoto_lambda::{
    Environment, GetFunctionConfigurationError, GetFunctionConfigurationRequest, Lambda,
    UpdateFunctionConfigurationError, UpdateFunctionConfigurationRequest,
};

use super::{FunctionsRepository, FunctionsRepositoryError};
use crate::errors::UnknownError;

pub struct FunctionsRepositoryImpl<T: Lambda + Sync + Send> {
    lambda_client: T,
}

impl<T: Lambda + Sync + Send> FunctionsRepositoryImpl<T> {
    pub fn new(lambda_client: T) -> Self {
        Self { lambda_client }
    }
}

#[async_trait]
impl<T: Lambda + Sync + Send> FunctionsRepository for FunctionsRepositoryImpl<T> {
    async fn get_environment(
        &self,
        function_name: String,
    ) -> Result<FunctionEnvironment, FunctionsRepositoryError> {
        let input = GetFunctionConfigurationRequest {
            function_name: function_name.clone(),
            ..GetFunctionConfigurationRequest::default()
        };

        let configuration = self
            .lambda_client
            .get_function_configuration(input)
            .await
            .map_err(|e| match e {
                RusotoError::Service(GetFunctionConfigurationError::ResourceNotFound(message)) => {
                    FunctionsRepositoryError::FunctionNotFound(format!(
                        "Function {function_name} not found: {message}"
                    ))
                }
                other => FunctionsRepositoryError::unknown(
                    other,
                    Some(format!(
                        "Error reading configuration of function {function_name}"
                    )),
                ),
            })?;

        let Some(environment) = configuration.environment else {
            return Ok(FunctionEnvironment::default());
        };

        // Variables are withheld when the platform fails to decrypt them. This must never be
        // read as an empty environment.
        if let Some(error) = environment.error {
            return Err(FunctionsRepositoryError::EnvironmentUnavailable(format!(
                "Environment of function {function_name} is unavailable: {} {}",
                error.error_code.unwrap_or_default(),
                error.message.unwrap_or_default()
            )));
        }

        Ok(FunctionEnvironment::new(
            environment.variables.unwrap_or_default(),
        ))
    }

    async fn update_environment(
        &self,
        function_name: String,
        environment: FunctionEnvironment,
    ) -> Result<(), FunctionsRepositoryError> {
        let input = UpdateFunctionConfigurationRequest {
            function_name: function_name.clone(),
            environment: Some(Environment {
                variables: Some(environment.into_variables()),
            }),
            ..UpdateFunctionConfigurationRequest::default()
        };

        let result = self
            .lambda_client
            .update_function_configuration(input)
            .await
            .map_err(|e| match e {
                RusotoError::Service(UpdateFunctionConfigurationError::ResourceNotFound(
                    message,
                )) => FunctionsRepositoryError::FunctionNotFound(format!(
                    "Function {function_name} not found: {message}"
                )),
                other => FunctionsRepositoryError::unknown(
                    other,
                    Some(format!(
                        "Error updating configuration of function {function_name}"
                    )),
                ),
            })?;

        tracing::info!(
            function_name = %function_name,
            last_update_status = ?result.last_update_status,
            revision_id = ?result.revision_id,
            "Updated function configuration"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::functions::{
        functions_repository_impl::FunctionsRepositoryImpl, FunctionsRepository,
        FunctionsRepositoryError,
    };
    use model::function_environment::FunctionEnvironment;
    use rstest::{fixture, rstest};
    use rusoto_core::Region;
    use rusoto_lambda::LambdaClient;
    use rusoto_mock::{MockCredentialsProvider, MockRequestDispatcher};

    const FUNCTION_NAME: &str = "lambda-backfill-iac-orders";

    struct TestFixture {
        pub function_name: String,
    }

    #[fixture]
    fn fixture() -> TestFixture {
        TestFixture {
            function_name: FUNCTION_NAME.to_owned(),
        }
    }

    fn repository(dispatcher: MockRequestDispatcher) -> FunctionsRepositoryImpl<LambdaClient> {
        FunctionsRepositoryImpl::new(LambdaClient::new_with(
            dispatcher,
            MockCredentialsProvider,
            Region::UsWest2,
        ))
    }

    #[rstest]
    #[tokio::test]
    async fn get_environment_returns_variables(fixture: TestFixture) {
        let dispatcher = MockRequestDispatcher::with_status(200)
            .with_body(
                r#"{
                    "FunctionName": "lambda-backfill-iac-orders",
                    "Environment": {
                        "Variables": {
                            "destination_table": "orders-old",
                            "LOG_LEVEL": "info"
                        }
                    }
                }"#,
            )
            .with_request_checker(|request| {
                assert_eq!("GET", request.method);
                assert!(request
                    .path
                    .ends_with("/functions/lambda-backfill-iac-orders/configuration"));
            });

        let environment = repository(dispatcher)
            .get_environment(fixture.function_name)
            .await
            .unwrap();

        assert_eq!(Some("orders-old"), environment.destination_table());
        assert_eq!(Some("info"), environment.get("LOG_LEVEL"));
    }

    #[rstest]
    #[tokio::test]
    async fn get_environment_without_environment_is_empty(fixture: TestFixture) {
        let dispatcher = MockRequestDispatcher::with_status(200)
            .with_body(r#"{"FunctionName": "lambda-backfill-iac-orders"}"#);

        let environment = repository(dispatcher)
            .get_environment(fixture.function_name)
            .await
            .unwrap();

        assert_eq!(FunctionEnvironment::default(), environment);
    }

    #[rstest]
    #[tokio::test]
    async fn get_environment_with_decryption_error(fixture: TestFixture) {
        let dispatcher = MockRequestDispatcher::with_status(200).with_body(
            r#"{
                "FunctionName": "lambda-backfill-iac-orders",
                "Environment": {
                    "Error": {
                        "ErrorCode": "AccessDeniedException",
                        "Message": "Lambda was unable to decrypt the environment variables"
                    }
                }
            }"#,
        );

        let error = repository(dispatcher)
            .get_environment(fixture.function_name)
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            FunctionsRepositoryError::EnvironmentUnavailable(_)
        ));
        assert!(error.to_string().contains("AccessDeniedException"));
    }

    #[rstest]
    #[tokio::test]
    async fn get_environment_function_not_found(fixture: TestFixture) {
        let dispatcher = MockRequestDispatcher::with_status(404)
            .with_header("x-amzn-ErrorType", "ResourceNotFoundException")
            .with_body(r#"{"Type": "User", "Message": "Function not found"}"#);

        let error = repository(dispatcher)
            .get_environment(fixture.function_name)
            .await
            .unwrap_err();

        assert!(matches!(error, FunctionsRepositoryError::FunctionNotFound(_)));
    }

    #[rstest]
    #[tokio::test]
    async fn get_environment_platform_error(fixture: TestFixture) {
        let dispatcher = MockRequestDispatcher::with_status(500).with_body("");

        let error = repository(dispatcher)
            .get_environment(fixture.function_name)
            .await
            .unwrap_err();

        assert!(matches!(error, FunctionsRepositoryError::Unknown(_)));
        assert!(error
            .to_string()
            .contains("Error reading configuration of function lambda-backfill-iac-orders"));
    }

    #[rstest]
    #[tokio::test]
    async fn update_environment_writes_configuration(fixture: TestFixture) {
        let dispatcher = MockRequestDispatcher::with_status(200)
            .with_body(
                r#"{
                    "FunctionName": "lambda-backfill-iac-orders",
                    "LastUpdateStatus": "InProgress",
                    "Environment": {"Variables": {"destination_table": "orders-restored"}}
                }"#,
            )
            .with_request_checker(|request| {
                assert_eq!("PUT", request.method);
                assert!(request
                    .path
                    .ends_with("/functions/lambda-backfill-iac-orders/configuration"));
            });

        let environment = FunctionEnvironment::new(HashMap::from([(
            "destination_table".to_owned(),
            "orders-restored".to_owned(),
        )]));

        repository(dispatcher)
            .update_environment(fixture.function_name, environment)
            .await
            .unwrap();
    }

    #[rstest]
    #[tokio::test]
    async fn update_environment_platform_error(fixture: TestFixture) {
        let dispatcher = MockRequestDispatcher::with_status(500).with_body("");

        let error = repository(dispatcher)
            .update_environment(fixture.function_name, FunctionEnvironment::default())
            .await
            .unwrap_err();

        assert!(matches!(error, FunctionsRepositoryError::Unknown(_)));
        assert!(error
            .to_string()
            .contains("Error updating configuration of function lambda-backfill-iac-orders"));
    }
}
