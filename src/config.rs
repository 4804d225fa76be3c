use axum::http::HeaderValue;
use std::{
    env,
    fmt::Display,
    net::{IpAddr, SocketAddr},
    path::PathBuf,
    str::FromStr,
};
use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: &str = "3000";
pub const DEFAULT_CLIENT_URL: &str = "http://localhost:5173";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },

    #[error("Missing value after {0}")]
    MissingArgument(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Frontend origin allowed by CORS.
    pub client_url: String,
    /// Built frontend to serve for non-API paths.
    pub static_dir: Option<PathBuf>,
}

impl Config {
    /// Reads the process environment, then applies `--bind <addr:port>` if given.
    pub fn load() -> Result<Self, ConfigError> {
        let args: Vec<String> = env::args().skip(1).collect();
        Self::from_sources(|key| env::var(key).ok(), &args)
    }

    pub fn from_sources(
        lookup: impl Fn(&str) -> Option<String>,
        args: &[String],
    ) -> Result<Self, ConfigError> {
        let host: IpAddr = try_load(&lookup, "HOST", DEFAULT_HOST)?;
        let port: u16 = try_load(&lookup, "PORT", DEFAULT_PORT)?;
        let mut bind_addr = SocketAddr::new(host, port);

        let client_url: String = try_load(&lookup, "CLIENT_URL", DEFAULT_CLIENT_URL)?;
        if let Err(e) = HeaderValue::from_str(&client_url) {
            return Err(ConfigError::Invalid {
                key: "CLIENT_URL",
                reason: e.to_string(),
            });
        }

        let static_dir = lookup("STATIC_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        if lookup("DATABASE_URL").is_some() {
            warn!("DATABASE_URL is set but records are kept in memory only");
        }

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => {
                    let value = args
                        .get(i + 1)
                        .ok_or(ConfigError::MissingArgument("--bind"))?;
                    bind_addr = value.parse().map_err(|e: std::net::AddrParseError| {
                        ConfigError::Invalid {
                            key: "--bind",
                            reason: e.to_string(),
                        }
                    })?;
                    i += 2;
                }
                other => {
                    warn!("Ignoring unknown argument {other}");
                    i += 1;
                }
            }
        }

        Ok(Self {
            bind_addr,
            client_url,
            static_dir,
        })
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    lookup(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_sources(env_of(&[]), &[]).unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.client_url, DEFAULT_CLIENT_URL);
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn test_environment_overrides() {
        let config = Config::from_sources(
            env_of(&[
                ("HOST", "127.0.0.1"),
                ("PORT", "8080"),
                ("CLIENT_URL", "https://clinique.example.dz"),
                ("STATIC_DIR", "dist/client"),
            ]),
            &[],
        )
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.client_url, "https://clinique.example.dz");
        assert_eq!(config.static_dir, Some(PathBuf::from("dist/client")));
    }

    #[test]
    fn test_bind_argument_wins_over_environment() {
        let args = vec!["--bind".to_string(), "127.0.0.1:4000".to_string()];
        let config = Config::from_sources(env_of(&[("PORT", "8080")]), &args).unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:4000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_invalid_port_is_reported() {
        let err = Config::from_sources(env_of(&[("PORT", "http")]), &[]).unwrap_err();

        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    }

    #[test]
    fn test_bind_without_value() {
        let args = vec!["--bind".to_string()];
        let err = Config::from_sources(env_of(&[]), &args).unwrap_err();

        assert_eq!(err, ConfigError::MissingArgument("--bind"));
    }
}
