pub mod aws_client_config;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum::{Display, EnumIter};

#[derive(Default, Serialize, Deserialize, Clone, Eq, PartialEq, EnumIter, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    Local,
    #[default]
    Development,
    QA,
    Staging,
    Production,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoaderError {
    #[error("Could not load configuration: {0}")]
    Envy(#[from] envy::Error),
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads the default configuration for the project. This is the
    /// configuration used in the deployed lambda.
    ///
    /// This will load the following files, in order:
    /// - OS environment variables
    /// - `.env.development` then `.env.development.local`
    /// - `.env.qa` then `.env.qa.local`
    /// - `.env.staging` then `.env.staging.local`
    /// - `.env.production` then `.env.production.local`
    /// - `.env.local`
    /// - `.env`
    ///
    /// If a variable is set in the OS environment, it will not be
    /// overriden by any file.
    pub async fn load_default<TConfig>() -> Result<TConfig, ConfigLoaderError>
    where
        TConfig: DeserializeOwned,
    {
        for environment in Environment::iter() {
            if environment != Environment::Local {
                dotenv::from_filename(format!(".env.{}.local", environment)).ok();
                dotenv::from_filename(format!(".env.{}", environment)).ok();
            }
        }

        ConfigLoader::load::<TConfig>().await
    }

    async fn load<TConfig>() -> Result<TConfig, ConfigLoaderError>
    where
        TConfig: DeserializeOwned,
    {
        dotenv::from_filename(".env.local").ok();
        dotenv::from_filename(".env").ok();

        Ok(envy::from_env::<TConfig>()?)
    }

    /// Deserializes a configuration from an explicit list of variables, without touching the
    /// process environment.
    pub fn from_vars<TConfig, I>(vars: I) -> Result<TConfig, ConfigLoaderError>
    where
        TConfig: DeserializeOwned,
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter::<_, TConfig>(vars)?)
    }
}
