// Configuration module entry point
// Loads layered configuration and owns the shared application state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, UpstreamConfig};

impl Config {
    /// Load configuration from `config.toml`, `RELAY_*` variables and `PORT`
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config", std::env::var("PORT").ok())
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// `port` overrides `server.port` when present, matching the plain `PORT`
    /// variable most hosting platforms inject.
    pub fn load_from(config_path: &str, port: Option<String>) -> Result<Self, config::ConfigError> {
        Self::load_with_env(config_path, None, port)
    }

    /// `env` replaces the process environment when given
    fn load_with_env(
        config_path: &str,
        env: Option<config::Map<String, String>>,
        port: Option<String>,
    ) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("RELAY")
                    .prefix_separator("_")
                    .separator("__")
                    .source(env),
            )
            .set_default("server.host", types::DEFAULT_HOST)?
            .set_default("server.port", i64::from(types::DEFAULT_PORT))?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", types::DEFAULT_ACCESS_LOG_FORMAT)?
            .set_default("performance.keep_alive", true)?
            .set_default("upstream.token_url", types::LINKEDIN_TOKEN_URL)?
            .set_default("upstream.userinfo_url", types::LINKEDIN_USERINFO_URL)?
            .set_default("upstream.ugc_posts_url", types::LINKEDIN_UGC_POSTS_URL)?
            .set_default(
                "upstream.restli_protocol_version",
                types::RESTLI_PROTOCOL_VERSION,
            )?
            .set_override_option("server.port", port)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn env(vars: &[(&str, &str)]) -> Option<config::Map<String, String>> {
        Some(
            vars.iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_load_defaults_without_file() {
        let cfg = Config::load_from("does-not-exist/config", None).unwrap();
        assert_eq!(cfg.server.port, 1234);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert!(cfg.server.workers.is_none());
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert_eq!(cfg.upstream, UpstreamConfig::default());
    }

    #[test]
    fn test_port_override() {
        let cfg = Config::load_from("does-not-exist/config", Some("8081".to_string())).unwrap();
        assert_eq!(cfg.server.port, 8081);
    }

    #[test]
    fn test_invalid_port_override_is_rejected() {
        let result = Config::load_from("does-not-exist/config", Some("not-a-port".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "[server]\nport = 4321\nworkers = 2\n\n[logging]\naccess_log_format = \"json\"\n\n[upstream]\nuserinfo_url = \"http://127.0.0.1:9/userinfo\"\n",
        )
        .unwrap();
        let base = dir.path().join("config");

        let cfg = Config::load_from(base.to_str().unwrap(), None).unwrap();
        assert_eq!(cfg.server.port, 4321);
        assert_eq!(cfg.server.workers, Some(2));
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.logging.access_log_format, "json");
        assert_eq!(cfg.upstream.userinfo_url, "http://127.0.0.1:9/userinfo");
        assert_eq!(cfg.upstream.token_url, types::LINKEDIN_TOKEN_URL);

        let cfg = Config::load_from(base.to_str().unwrap(), Some("5000".to_string())).unwrap();
        assert_eq!(cfg.server.port, 5000);
    }

    #[test]
    fn test_prefixed_env_overrides() {
        let vars = env(&[
            ("RELAY_LOGGING__ACCESS_LOG", "false"),
            ("RELAY_SERVER__PORT", "9090"),
            ("RELAY_UPSTREAM__RESTLI_PROTOCOL_VERSION", "2.1.0"),
            ("OTHER_SERVER__PORT", "1"),
        ]);
        let cfg = Config::load_with_env("does-not-exist/config", vars, None).unwrap();
        assert!(!cfg.logging.access_log);
        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.upstream.restli_protocol_version, "2.1.0");

        let vars = env(&[("RELAY_SERVER__PORT", "9090")]);
        let cfg = Config::load_with_env("does-not-exist/config", vars, Some("7000".to_string())).unwrap();
        assert_eq!(cfg.server.port, 7000);
    }

    #[test]
    fn test_get_socket_addr() {
        let cfg = Config::default();
        let addr = cfg.get_socket_addr().unwrap();
        assert_eq!(addr.port(), 1234);
        assert!(addr.ip().is_unspecified());

        let mut bad = Config::default();
        bad.server.host = "not a host".to_string();
        assert!(bad.get_socket_addr().is_err());
    }
}
