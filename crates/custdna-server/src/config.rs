//! Server configuration

use custdna_classifiers::ClassifierConfig;
use custdna_profile::ProfileAggregator;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable prefix, e.g. `CUSTDNA_PORT` or `CUSTDNA_LOGGING__FORMAT`
pub const ENV_PREFIX: &str = "CUSTDNA";

/// Keys whose environment values are comma-separated lists
const LIST_KEYS: [&str; 4] = [
    "cors.allowed_origins",
    "classifier.keywords.trouble",
    "classifier.keywords.appreciation",
    "classifier.keywords.inquiry",
];

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address
    pub listen: String,

    /// Listen port
    pub port: u16,

    /// Customer store document
    pub data_path: PathBuf,

    pub cors: CorsConfig,

    pub logging: LoggingConfig,

    /// Inference rule thresholds and keyword lists
    pub classifier: ClassifierConfig,

    /// Detailed and compact profile views
    pub profile: ProfileAggregator,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0".to_string(),
            port: 3000,
            data_path: PathBuf::from("db.json"),
            cors: CorsConfig::default(),
            logging: LoggingConfig::default(),
            classifier: ClassifierConfig::default(),
            profile: ProfileAggregator::default(),
        }
    }
}

impl ServerConfig {
    /// Load from an optional YAML file, then `CUSTDNA_*` environment variables
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        Self::load_with_env(path, None)
    }

    /// Same as [`ServerConfig::load`], reading variables from `env` instead
    /// of the process environment when given
    pub fn load_with_env(
        path: &str,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let environment = LIST_KEYS.iter().fold(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(","),
            |environment, key| environment.with_list_parse_key(key),
        );

        let settings = config::Config::builder()
            .add_source(config::File::new(path, config::FileFormat::Yaml).required(false))
            .add_source(environment.source(env))
            .build()?;

        settings.try_deserialize()
    }

    /// Apply command-line overrides on top of file and environment values
    pub fn apply_overrides(
        &mut self,
        listen: Option<String>,
        port: Option<u16>,
        data_path: Option<PathBuf>,
    ) {
        if let Some(listen) = listen {
            self.listen = listen;
        }
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(data_path) = data_path {
            self.data_path = data_path;
        }
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.listen, self.port).parse()?)
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Allowed origins; `*` allows any origin
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
        }
    }
}

impl CorsConfig {
    pub fn allows_any(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}
