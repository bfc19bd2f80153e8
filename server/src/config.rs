// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

use std::fmt;
use std::net::SocketAddr;
use std::path::Path;
use std::str::FromStr;

use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use serde::{Deserialize, Deserializer};

use crate::constants::{SERVER_HOST, SERVER_PORT};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: LogLevel,
    /// Origins allowed to call the API from a browser. Empty disables CORS.
    #[serde(deserialize_with = "comma_list")]
    pub cors_origins: Vec<String>,

    /// Language model provider credentials
    pub openai_api_key: String,
    pub openai_api_base: Option<String>,

    /// Telemetry
    pub langwatch_api_key: Option<String>,

    /// Scenario test harness
    pub scenario_batch_run_id: Option<String>,
    pub scenario_cache_key: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(format!(
                "Invalid log level `{s}`. Valid levels are: TRACE, DEBUG, INFO, WARN, ERROR"
            )),
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = String;

    fn try_from(value: String) -> Result<Self, <LogLevel as TryFrom<String>>::Error> {
        value.parse()
    }
}

/// Accept either a YAML list or a comma-separated string such as
/// `CORS_ORIGINS=http://a.com,http://b.com`.
fn comma_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<String>),
        One(String),
    }

    let items = match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Many(items) => items,
        OneOrMany::One(joined) => joined.split(',').map(str::to_owned).collect(),
    };

    Ok(items
        .into_iter()
        .map(|item| item.trim().to_owned())
        .filter(|item| !item.is_empty())
        .collect())
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            ConfigError::Message("Invalid path: contains non-UTF8 characters".to_string())
        })?;

        let config = Config::builder()
            .add_source(File::with_name(path_str))
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration from the default YAML files and the environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_env(None)
    }

    /// Load configuration with custom file path and environment variable override
    pub fn load_with_env(config_path: Option<&str>) -> Result<Self, ConfigError> {
        Self::load_from(config_path, Environment::default())
    }

    fn load_from(config_path: Option<&str>, env: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path));
        } else {
            builder = default_files(builder);
        }

        // Env values stay strings so credentials like `00123` survive as-is
        let config = builder.add_source(env).build()?;
        config.try_deserialize()
    }

    /// Fail if the language model credentials are missing
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.openai_api_key.is_empty() {
            return Err(ConfigError::Message(
                "OPENAI_API_KEY is required. \
                 Please set it in your .env file or environment variables."
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Whether the minimum required configuration is present
    pub fn is_configured(&self) -> bool {
        !self.openai_api_key.is_empty()
    }

    /// Socket address the HTTP server binds to
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                ConfigError::Message(format!(
                    "Invalid host or port `{}:{}`: {e}",
                    self.host, self.port
                ))
            })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: SERVER_HOST.to_owned(),
            port: SERVER_PORT,
            log_level: LogLevel::default(),
            cors_origins: Vec::new(),
            openai_api_key: String::new(),
            openai_api_base: None,
            langwatch_api_key: None,
            scenario_batch_run_id: None,
            scenario_cache_key: None,
        }
    }
}

fn default_files(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder
        .add_source(File::with_name("config.yaml").required(false))
        .add_source(File::with_name("config.yml").required(false))
}
