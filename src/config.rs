use anyhow::Result;
use std::env;

/// Default cap on request bodies (256 KiB)
const DEFAULT_MAX_BODY_BYTES: usize = 256 * 1024;

/// Application configuration, read once at startup
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: String,
    pub port: u16,
    /// API key for `/config/*` routes (optional; open mode when unset)
    pub api_key: Option<String>,
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0".to_string(),
            port: 8080,
            api_key: None,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),

            // APP_PORT takes precedence over PORT
            port: match env::var("APP_PORT").or_else(|_| env::var("PORT")) {
                Ok(port) => port.parse()?,
                Err(_) => defaults.port,
            },

            api_key: env::var("API_KEY").ok().filter(|k| !k.is_empty()),

            max_body_bytes: match env::var("MAX_BODY_BYTES") {
                Ok(bytes) => bytes.parse()?,
                Err(_) => defaults.max_body_bytes,
            },
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
        assert_eq!(config.max_body_bytes, 262144);
        assert!(config.api_key.is_none());
    }
}
