use thiserror::Error;

pub const HOST_VAR: &str = "EVENTS_API_HOST";
pub const PORT_VAR: &str = "EVENTS_API_PORT";
pub const SEED_VAR: &str = "EVENTS_API_SEED";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },

    #[error("{var} must be one of true, false, 1, 0, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Start the store with the introductory event.
    pub seed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from any variable source; unset variables fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup(HOST_VAR).unwrap_or(defaults.host);

        let port = match lookup(PORT_VAR) {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort {
                    var: PORT_VAR,
                    value,
                })?,
            None => defaults.port,
        };

        let seed = match lookup(SEED_VAR) {
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => {
                    return Err(ConfigError::InvalidFlag {
                        var: SEED_VAR,
                        value,
                    });
                }
            },
            None => defaults.seed,
        };

        Ok(Self { host, port, seed })
    }

    /// `host:port`, resolved by the listener so hostnames work too.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
