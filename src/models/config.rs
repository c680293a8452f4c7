//! Configuration model loaded from external sources.

use ::config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use validator::Validate;

use crate::domain::dsn::DsnTemplate;

pub const DEFAULT_CONFIG_PATH: &str = "config/admin.yaml";
const ENV_PREFIX: &str = "APP";

#[derive(Clone, Debug, Deserialize, Validate)]
/// Settings of the administration client.
pub struct AdminConfig {
    /// URL of the configuration backend handling every form post.
    #[validate(url)]
    pub endpoint: String,
    /// DSN template with `{db}` and `{host}` placeholders.
    #[validate(length(min = 1))]
    pub dsn_sample: String,
}

impl AdminConfig {
    /// Loads the optional YAML file at `path`, then `APP_*` environment
    /// variables on top of it.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::new(path, FileFormat::Yaml).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let config: AdminConfig = settings.try_deserialize()?;
        config
            .validate()
            .map_err(|err| ConfigError::Message(format!("invalid configuration: {err}")))?;
        Ok(config)
    }

    pub fn dsn_template(&self) -> DsnTemplate {
        DsnTemplate::new(self.dsn_sample.clone())
    }
}
