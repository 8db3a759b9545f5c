use config::{Config, ConfigError, Environment};
use dotenv::dotenv;
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub listings_path: PathBuf,
    pub host: IpAddr,
    pub port: u16,
    pub cache_listings: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenv().ok(); // Load .env file if present
        Self::from_environment(Environment::default().try_parsing(true))
    }

    fn from_environment(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("listings_path", "data/listings.json")?
            .set_default("host", "127.0.0.1")?
            .set_default("port", 3000)?
            .set_default("cache_listings", true)?
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::default().try_parsing(true).source(Some(map))
    }

    #[test]
    fn defaults_apply_without_environment() {
        let config = AppConfig::from_environment(env(&[])).unwrap();
        assert_eq!(config.listings_path, PathBuf::from("data/listings.json"));
        assert_eq!(config.bind_addr(), "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert!(config.cache_listings);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = AppConfig::from_environment(env(&[
            ("LISTINGS_PATH", "/srv/listings.json"),
            ("PORT", "8081"),
            ("CACHE_LISTINGS", "false"),
        ]))
        .unwrap();
        assert_eq!(config.listings_path, PathBuf::from("/srv/listings.json"));
        assert_eq!(config.port, 8081);
        assert!(!config.cache_listings);
    }

    #[test]
    fn invalid_port_is_an_error() {
        assert!(AppConfig::from_environment(env(&[("PORT", "http")])).is_err());
    }
}
