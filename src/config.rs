use std::env;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CLASSIFY_DELAY_MS: u64 = 1500;

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Artificial latency before answering, standing in for inference time.
    pub classify_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            classify_delay: Duration::from_millis(DEFAULT_CLASSIFY_DELAY_MS),
        }
    }
}

impl Config {
    /// Reads `HOTDOG_HOST`, `HOTDOG_PORT` and `HOTDOG_CLASSIFY_DELAY_MS`.
    /// Missing or malformed values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Config::default();

        Self {
            host: env::var("HOTDOG_HOST").unwrap_or(defaults.host),
            port: env_parsed("HOTDOG_PORT").unwrap_or(defaults.port),
            classify_delay: env_parsed("HOTDOG_CLASSIFY_DELAY_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.classify_delay),
        }
    }
}

fn env_parsed<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|value| value.parse().ok())
}
