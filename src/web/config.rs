use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Element set baked in so the service runs with no config file at all.
pub const DEFAULT_TLE: &str = "ISS (ZARYA)\n\
    1 25544U 98067A   20194.88612269 -.00002218  00000-0 -31515-4 0  9992\n\
    2 25544  51.6461 221.2784 0001413  89.1723 280.4612 15.49507896236008\n";

pub const DEFAULT_REMOTE_URL: &str = "http://api.open-notify.org/iss-now.json";

const PROPAGATOR_POLL: Duration = Duration::from_secs(1);
const REMOTE_POLL: Duration = Duration::from_secs(5);
const TRACK_REFRESH: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub satellite: SatelliteConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub track: TrackConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct SatelliteConfig {
    pub name: Option<String>,
    /// Inline element set; takes precedence over `tle_file`.
    pub tle: Option<String>,
    pub tle_file: Option<PathBuf>,
}

impl SatelliteConfig {
    pub fn tle_text(&self) -> Result<String, ConfigError> {
        if let Some(tle) = &self.tle {
            return Ok(tle.clone());
        }
        if let Some(path) = &self.tle_file {
            return Ok(std::fs::read_to_string(path)?);
        }
        Ok(DEFAULT_TLE.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    #[default]
    Propagator,
    Remote,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct SourceConfig {
    #[serde(default)]
    pub kind: SourceKind,
    pub url: Option<String>,
    #[serde(default, deserialize_with = "opt_duration")]
    pub interval: Option<Duration>,
}

impl SourceConfig {
    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or(DEFAULT_REMOTE_URL)
    }

    /// 1 s for the local propagator; remote endpoints are polled gentler.
    pub fn interval(&self) -> Duration {
        self.interval.unwrap_or(match self.kind {
            SourceKind::Propagator => PROPAGATOR_POLL,
            SourceKind::Remote => REMOTE_POLL,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackConfig {
    #[serde(default = "default_track_interval", deserialize_with = "duration")]
    pub interval: Duration,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            interval: default_track_interval(),
        }
    }
}

fn default_track_interval() -> Duration {
    TRACK_REFRESH
}

fn duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    humantime::parse_duration(raw.trim()).map_err(serde::de::Error::custom)
}

fn opt_duration<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    raw.map(|s| humantime::parse_duration(s.trim()).map_err(serde::de::Error::custom))
        .transpose()
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_need_no_file() {
        let config = Config::default();
        assert_eq!(config.web.bind, "0.0.0.0:8080");
        assert_eq!(config.source.kind, SourceKind::Propagator);
        assert_eq!(config.source.interval(), Duration::from_secs(1));
        assert_eq!(config.track.interval, Duration::from_secs(60));
        assert!(config.satellite.tle_text().unwrap().contains("25544"));
    }

    #[test]
    fn parses_full_yaml() {
        let yaml = r#"
web:
  bind: "127.0.0.1:9000"
satellite:
  name: "NOAA 15"
  tle: |
    1 25338U 98030A   24194.50000000  .00000100  00000-0  60000-4 0  9993
    2 25338  98.5700 200.0000 0009000 100.0000 260.0000 14.26000000360000
source:
  kind: remote
  url: "http://example.org/position.json"
track:
  interval: "2m"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.web.bind, "127.0.0.1:9000");
        assert_eq!(config.source.kind, SourceKind::Remote);
        assert_eq!(config.source.url(), "http://example.org/position.json");
        assert_eq!(config.source.interval(), Duration::from_secs(5));
        assert_eq!(config.track.interval, Duration::from_secs(120));
        assert!(config.satellite.tle_text().unwrap().starts_with("1 25338U"));
    }

    #[test]
    fn source_interval_override() {
        let yaml = "source:\n  interval: \"500ms\"\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.source.interval(), Duration::from_millis(500));
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(serde_yaml::from_str::<Config>("nonsense: true\n").is_err());
    }
}
