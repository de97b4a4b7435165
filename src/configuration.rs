use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::trivia::QUESTIONS_PER_PAGE;

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub page_size: usize,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct DatabaseSettings {
    pub path: String,
}

impl Default for ApplicationSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_owned(),
            port: 8080,
            page_size: QUESTIONS_PER_PAGE,
        }
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: "trivia.db".to_owned(),
        }
    }
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Settings {
    /// Reads `configuration/base.*` (optional) and then `APP_*` environment variables,
    /// e.g. `APP_DATABASE__PATH=/var/lib/trivia.db`. A `.env` file is honoured.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let config = Config::builder()
            .add_source(File::with_name("configuration/base").required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;
        Self::from_config(config)
    }

    /// A `page_size` of 0 is rejected, it would make every listing page empty.
    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        let settings: Settings = config.try_deserialize()?;
        if settings.application.page_size == 0 {
            return Err(ConfigError::Message(
                "application.page_size must be at least 1".to_owned(),
            ));
        }
        Ok(settings)
    }
}
