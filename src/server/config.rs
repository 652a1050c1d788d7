use serde::Deserialize;

/// file consulted when `IDRAFT_CONFIG` is unset, extension resolved by the `config` crate
const DEFAULT_CONFIG_PATH: &str = "config/default";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_request_size_mb: usize,
}

impl Config {
    /// Layers built-in defaults, an optional config file, then `IDRAFT__*` environment variables
    pub fn load() -> Result<Self, config::ConfigError> {
        let path =
            std::env::var("IDRAFT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000_i64)?
            .set_default("server.max_request_size_mb", 10_i64)?
            .add_source(config::File::with_name(&path).required(false))
            .add_source(config::Environment::with_prefix("IDRAFT").separator("__"))
            .build()?
            .try_deserialize()
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn max_request_bytes(&self) -> usize {
        self.max_request_size_mb * 1024 * 1024
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 5000,
            max_request_size_mb: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_listen_on_port_5000() {
        let config = ServerConfig::default();

        assert_eq!(config.address(), "0.0.0.0:5000");
        assert_eq!(config.max_request_bytes(), 10 * 1024 * 1024);
    }

    #[test]
    fn environment_overrides_defaults_without_a_file() {
        std::env::set_var("IDRAFT_CONFIG", "config/does-not-exist");
        std::env::set_var("IDRAFT__SERVER__PORT", "6001");

        let loaded = Config::load();

        std::env::remove_var("IDRAFT__SERVER__PORT");
        std::env::remove_var("IDRAFT_CONFIG");

        let server = loaded.unwrap().server;
        assert_eq!(server.port, 6001);
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.max_request_size_mb, 10);
    }
}
