use config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use secrecy::Secret;
use serde_aux::field_attributes::deserialize_number_from_string;
use url::Url;

/// Retrieve the configuration for the application.
///
/// Values are read from `configuration.yaml` and can be overridden through
/// `APP_`-prefixed environment variables, e.g.
/// `APP_AUTH_SERVICE__BASE_URL=http://localhost:9000`.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    Config::builder()
        .add_source(File::new("configuration.yaml", FileFormat::Yaml))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
}

#[derive(Debug, serde::Deserialize, Getters)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub auth_service: AuthServiceSettings,
}

#[derive(Debug, serde::Deserialize, Getters)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub hmac_secret: Secret<String>,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Settings for the remote authentication service that performs the actual
/// account creation.
#[derive(Debug, serde::Deserialize)]
pub struct AuthServiceSettings {
    pub base_url: String,
}

impl AuthServiceSettings {
    pub fn url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.base_url)
    }
}
