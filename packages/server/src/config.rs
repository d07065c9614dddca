//! Server configuration.

use std::time::Duration;

/// Default interval between two inactivity sweeps
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(15);

/// Default silence after which a participant is considered gone
pub const DEFAULT_STALE_AFTER: Duration = Duration::from_secs(10);

/// Presence tracking settings.
///
/// The staleness threshold is conventionally shorter than the interval so
/// that eviction happens on the first sweep after a participant goes quiet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenceConfig {
    pub sweep_interval: Duration,
    pub stale_after: Duration,
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self {
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
            stale_after: DEFAULT_STALE_AFTER,
        }
    }
}

/// Everything the server needs to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub presence: PresenceConfig,
}

impl ServerConfig {
    /// `host:port` to bind the listener to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            presence: PresenceConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // テスト項目: デフォルト設定は 15 秒間隔・10 秒閾値
        // when (操作):
        let config = ServerConfig::default();

        // then (期待する結果):
        assert_eq!(config.bind_address(), "127.0.0.1:5000");
        assert_eq!(config.presence.sweep_interval, Duration::from_secs(15));
        assert_eq!(config.presence.stale_after, Duration::from_secs(10));
        assert!(config.presence.stale_after < config.presence.sweep_interval);
    }
}
