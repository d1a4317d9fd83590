//! Worker configuration loading from file and environment variables.

use kumpel_types::voice::VoiceProfile;
use kumpel_voice::LiveKitConfig;
use serde::Deserialize;
use thiserror::Error;

/// Top-level worker configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// LiveKit connection settings.
    #[serde(default)]
    pub livekit: LiveKitConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Job settings for this worker run.
    #[serde(default)]
    pub job: JobConfig,

    /// Voice profile set. When present it replaces the built-in registry
    /// entirely and is validated the same way.
    #[serde(default)]
    pub profiles: Option<Vec<VoiceProfile>>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "kumpel_worker=debug,info").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to output logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

/// The job this worker run serves.
///
/// In a deployment the dispatcher supplies these per job; for a single
/// worker run they come from config or environment.
#[derive(Debug, Clone, Deserialize)]
pub struct JobConfig {
    /// Job identifier used in logs.
    #[serde(default = "default_job_id")]
    pub id: String,

    /// Room the agent should join.
    #[serde(default = "default_room")]
    pub room: String,

    /// Raw metadata blob attached to the job, if any. Expected to be JSON
    /// but treated as untrusted.
    #[serde(default)]
    pub metadata: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_job_id() -> String {
    "local".to_string()
}

fn default_room() -> String {
    "voice-assistant-room".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            id: default_job_id(),
            room: default_room(),
            metadata: None,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads configuration from a TOML file, falling back to defaults.
///
/// Environment variable overrides:
/// - `KUMPEL_LIVEKIT_URL` overrides `livekit.url`
/// - `KUMPEL_LIVEKIT_API_KEY` overrides `livekit.api_key`
/// - `KUMPEL_LIVEKIT_API_SECRET` overrides `livekit.api_secret`
/// - `KUMPEL_LOG_LEVEL` overrides `logging.level`
/// - `KUMPEL_LOG_JSON` overrides `logging.json` (set to "true" to enable)
/// - `KUMPEL_JOB_ID` overrides `job.id`
/// - `KUMPEL_ROOM` overrides `job.room`
/// - `KUMPEL_JOB_METADATA` overrides `job.metadata`
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = p, "config file not found, using defaults");
                Config::default()
            }
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => Config::default(),
    };

    // Environment variable overrides
    if let Ok(url) = std::env::var("KUMPEL_LIVEKIT_URL") {
        config.livekit.url = url;
    }
    if let Ok(key) = std::env::var("KUMPEL_LIVEKIT_API_KEY") {
        config.livekit.api_key = key;
    }
    if let Ok(secret) = std::env::var("KUMPEL_LIVEKIT_API_SECRET") {
        config.livekit.api_secret = secret;
    }
    if let Ok(level) = std::env::var("KUMPEL_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Ok(json) = std::env::var("KUMPEL_LOG_JSON") {
        config.logging.json = json == "true" || json == "1";
    }
    if let Ok(id) = std::env::var("KUMPEL_JOB_ID") {
        config.job.id = id;
    }
    if let Ok(room) = std::env::var("KUMPEL_ROOM") {
        config.job.room = room;
    }
    if let Ok(metadata) = std::env::var("KUMPEL_JOB_METADATA") {
        config.job.metadata = Some(metadata);
    }

    Ok(config)
}
