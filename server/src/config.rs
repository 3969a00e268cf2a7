//! Server configuration from environment variables with code defaults.

use std::path::PathBuf;

/// Process-wide configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server_port: u16,

    /// Preferred label font; when unset or unusable the engine falls back
    /// to system fonts.
    pub font_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server_port: 8080,
            font_path: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the environment (`SERVER_PORT`,
    /// `LABEL_FONT_PATH`), falling back to defaults.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();
        if let Ok(v) = std::env::var("SERVER_PORT") {
            if let Ok(port) = v.parse::<u16>() {
                config.server_port = port;
            }
        }
        if let Ok(v) = std::env::var("LABEL_FONT_PATH") {
            if !v.is_empty() {
                config.font_path = Some(PathBuf::from(v));
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.server_port, 8080);
        assert!(config.font_path.is_none());
    }
}
