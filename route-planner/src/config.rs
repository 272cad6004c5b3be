//! Application configuration read from the environment.

use crate::geocode::GeocodeConfig;
use crate::render::MapConfig;
use crate::routing::RouteClientConfig;

/// Errors from reading the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A numeric variable could not be parsed
    #[error("{var} must be a positive whole number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    /// A variable was set to an empty string
    #[error("{var} is set but empty")]
    Empty { var: &'static str },
}

/// Everything the binary needs to build a session.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub route: RouteClientConfig,
    pub geocode: GeocodeConfig,
    pub map: MapConfig,
}

impl AppConfig {
    /// Read overrides from the process environment.
    ///
    /// - `ROUTE_SERVICE_URL`: base URL of the routing service
    /// - `GEOCODER_URL`: base URL of the reverse geocoder
    /// - `GEOCODER_USER_AGENT`: User-Agent sent to the geocoder
    /// - `HTTP_TIMEOUT_SECS`: timeout for both HTTP clients
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like [`AppConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let get = |var: &'static str| -> Result<Option<String>, ConfigError> {
            match lookup(var) {
                None => Ok(None),
                Some(value) if value.trim().is_empty() => Err(ConfigError::Empty { var }),
                Some(value) => Ok(Some(value.trim().to_string())),
            }
        };

        let mut config = Self::default();

        if let Some(url) = get("ROUTE_SERVICE_URL")? {
            config.route = config.route.with_base_url(url);
        }
        if let Some(url) = get("GEOCODER_URL")? {
            config.geocode = config.geocode.with_base_url(url);
        }
        if let Some(agent) = get("GEOCODER_USER_AGENT")? {
            config.geocode = config.geocode.with_user_agent(agent);
        }
        if let Some(value) = get("HTTP_TIMEOUT_SECS")? {
            let secs = match value.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        var: "HTTP_TIMEOUT_SECS",
                        value,
                    });
                }
            };
            config.route = config.route.with_timeout(secs);
            config.geocode = config.geocode.with_timeout(secs);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let vars: Vec<(&'static str, String)> =
            vars.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |var| {
            vars.iter()
                .find(|(k, _)| *k == var)
                .map(|(_, v)| v.clone())
        }
    }

    #[test]
    fn defaults_without_variables() {
        let config = AppConfig::from_lookup(env(&[])).unwrap();

        assert_eq!(config.route.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.route.timeout_secs, 30);
        assert_eq!(config.geocode.base_url, "https://nominatim.openstreetmap.org");
        assert_eq!(config.map.zoom, 13);
    }

    #[test]
    fn overrides_from_variables() {
        let config = AppConfig::from_lookup(env(&[
            ("ROUTE_SERVICE_URL", "http://routes.local:8080/"),
            ("GEOCODER_URL", "http://geo.local"),
            ("GEOCODER_USER_AGENT", "planner-test/1.0"),
            ("HTTP_TIMEOUT_SECS", " 5 "),
        ]))
        .unwrap();

        assert_eq!(config.route.base_url, "http://routes.local:8080/");
        assert_eq!(config.route.timeout_secs, 5);
        assert_eq!(config.geocode.base_url, "http://geo.local");
        assert_eq!(config.geocode.user_agent, "planner-test/1.0");
        assert_eq!(config.geocode.timeout_secs, 5);
    }

    #[test]
    fn invalid_timeout() {
        for bad in ["soon", "-3", "0", "1.5"] {
            let err = AppConfig::from_lookup(env(&[("HTTP_TIMEOUT_SECS", bad)])).unwrap_err();
            assert_eq!(
                err,
                ConfigError::InvalidNumber {
                    var: "HTTP_TIMEOUT_SECS",
                    value: bad.to_string(),
                }
            );
        }
    }

    #[test]
    fn empty_variable() {
        let err = AppConfig::from_lookup(env(&[("ROUTE_SERVICE_URL", "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::Empty { var: "ROUTE_SERVICE_URL" });
        assert_eq!(err.to_string(), "ROUTE_SERVICE_URL is set but empty");
    }
}
