use model::event_source_mapping::MappingTarget;
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    /// ARN of the buffer queue the backfill function consumes.
    pub sqs_arn: String,

    /// Name of the backfill function.
    pub lambda_function_name: String,
}

impl From<Config> for MappingTarget {
    fn from(config: Config) -> Self {
        MappingTarget {
            event_source_arn: config.sqs_arn,
            function_name: config.lambda_function_name,
        }
    }
}
