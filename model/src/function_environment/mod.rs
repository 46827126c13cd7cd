use serde::{self, Deserialize, Serialize};
use std::collections::HashMap;

/// Environment variable the backfill function reads its destination table from.
pub const DESTINATION_TABLE_KEY: &str = "destination_table";

/// Environment variables of a managed function.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct FunctionEnvironment {
    variables: HashMap<String, String>,
}

impl FunctionEnvironment {
    pub fn new(variables: HashMap<String, String>) -> Self {
        Self { variables }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    pub fn destination_table(&self) -> Option<&str> {
        self.get(DESTINATION_TABLE_KEY)
    }

    /// Sets `destination_table`, keeping every other variable as it was.
    pub fn with_destination_table(mut self, table_name: impl Into<String>) -> Self {
        self.variables
            .insert(DESTINATION_TABLE_KEY.to_owned(), table_name.into());
        self
    }

    pub fn variables(&self) -> &HashMap<String, String> {
        &self.variables
    }

    pub fn into_variables(self) -> HashMap<String, String> {
        self.variables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_table_is_added_to_empty_environment() {
        let environment = FunctionEnvironment::default().with_destination_table("restored");
        assert_eq!(Some("restored"), environment.destination_table());
        assert_eq!(1, environment.variables().len());
    }

    #[test]
    fn destination_table_keeps_unrelated_variables() {
        let environment = FunctionEnvironment::new(HashMap::from([
            ("LOG_LEVEL".to_owned(), "debug".to_owned()),
            (DESTINATION_TABLE_KEY.to_owned(), "old".to_owned()),
        ]))
        .with_destination_table("new");

        assert_eq!(Some("new"), environment.destination_table());
        assert_eq!(Some("debug"), environment.get("LOG_LEVEL"));
        assert_eq!(2, environment.into_variables().len());
    }
}
