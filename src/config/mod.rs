// Configuration module entry point
// Resolves layered configuration once at startup

mod state;
mod types;

use std::collections::HashMap;
use std::net::SocketAddr;

pub use state::AppState;
pub use types::{Config, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig};

/// Environment variable that selects the listening port
pub const PORT_ENV: &str = "PORT";

/// Port used when `PORT` is unset or empty
pub const DEFAULT_PORT: u16 = 3000;

/// Prefix of nested overrides, e.g. `SERVER_LOGGING__ACCESS_LOG=false`
const ENV_PREFIX: &str = "SERVER";

impl Config {
    /// Load configuration from the specified file path (without extension)
    ///
    /// Sources, lowest priority first: built-in defaults, the config file
    /// (optional), `SERVER_<SECTION>__<KEY>` environment variables, then `PORT`.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        Self::load_with_vars(config_path, std::env::vars())
    }

    /// Same as [`Config::load_from`], reading variables from `vars` instead of
    /// the process environment
    pub fn load_with_vars<I>(config_path: &str, vars: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: HashMap<String, String> = vars.into_iter().collect();
        let port = port_override(vars.get(PORT_ENV).cloned());

        let settings = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "hello-routes")?
            .set_default("http.enable_cors", false)?
            .set_default("http.max_body_size", 10_485_760)? // 10MB
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .source(Some(vars.into_iter().collect())),
            )
            .set_override_option("server.port", port)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// An empty `PORT` counts as unset
fn port_override(raw: Option<String>) -> Option<String> {
    raw.map(|p| p.trim().to_string()).filter(|p| !p.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MISSING: &str = "definitely/not/a/config/file";

    fn build(vars: &[(&str, &str)]) -> Result<Config, config::ConfigError> {
        Config::load_with_vars(
            MISSING,
            vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())),
        )
    }

    #[test]
    fn test_defaults() {
        let cfg = build(&[]).unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, DEFAULT_PORT);
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert_eq!(cfg.performance.keep_alive_timeout, 75);
        assert_eq!(cfg.http.server_name, "hello-routes");
        assert_eq!(cfg.http.max_body_size, 10_485_760);
        assert!(cfg.performance.max_connections.is_none());
    }

    #[test]
    fn test_port_env_overrides_default() {
        let cfg = build(&[("PORT", "8081")]).unwrap();
        assert_eq!(cfg.server.port, 8081);
    }

    #[test]
    fn test_empty_port_env_falls_back() {
        let cfg = build(&[("PORT", "")]).unwrap();
        assert_eq!(cfg.server.port, DEFAULT_PORT);
        let cfg = build(&[("PORT", "  ")]).unwrap();
        assert_eq!(cfg.server.port, DEFAULT_PORT);
    }

    #[test]
    fn test_invalid_port_env_is_an_error() {
        assert!(build(&[("PORT", "not-a-port")]).is_err());
        assert!(build(&[("PORT", "70000")]).is_err());
    }

    #[test]
    fn test_server_env_overrides_nested_keys() {
        let cfg = build(&[
            ("SERVER_LOGGING__ACCESS_LOG", "false"),
            ("SERVER_HTTP__SERVER_NAME", "edge-1"),
            ("SERVER_PERFORMANCE__MAX_CONNECTIONS", "64"),
        ])
        .unwrap();
        assert!(!cfg.logging.access_log);
        assert_eq!(cfg.http.server_name, "edge-1");
        assert_eq!(cfg.performance.max_connections, Some(64));
    }

    #[test]
    fn test_port_wins_over_server_env() {
        let cfg = build(&[("SERVER_SERVER__PORT", "5000")]).unwrap();
        assert_eq!(cfg.server.port, 5000);

        let cfg = build(&[("SERVER_SERVER__PORT", "5000"), ("PORT", "6000")]).unwrap();
        assert_eq!(cfg.server.port, 6000);
    }

    #[test]
    fn test_unrelated_vars_are_ignored() {
        let cfg = build(&[
            ("HTTP__SERVER_NAME", "nope"),
            ("SERVERLESS__HTTP__SERVER_NAME", "nope"),
        ])
        .unwrap();
        assert_eq!(cfg.http.server_name, "hello-routes");
    }

    #[test]
    fn test_socket_addr() {
        let mut cfg = build(&[("PORT", "4000")]).unwrap();
        assert_eq!(cfg.socket_addr().unwrap().to_string(), "127.0.0.1:4000");

        cfg.server.host = "not a host".to_string();
        assert!(cfg.socket_addr().is_err());
    }
}
