use crate::deserializers::aws::aws_region;
use rusoto_core::region::Region;
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct AwsClientConfig {
    /// Current AWS region.
    #[serde(deserialize_with = "aws_region")]
    aws_region: Region,

    /// Only used for development. LocalStack endpoint
    #[serde(default = "default_localstack_test_mode_endpoint")]
    pub localstack_test_mode_endpoint: Option<String>,
}

impl AwsClientConfig {
    pub fn region(&self) -> Region {
        match self.localstack_test_mode_endpoint.clone() {
            Some(endpoint) => Region::Custom {
                name: self.aws_region.name().to_owned(),
                endpoint,
            },
            None => self.aws_region.clone(),
        }
    }
}

fn default_localstack_test_mode_endpoint() -> Option<String> {
    None
}
