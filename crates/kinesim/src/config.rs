//! Engine and output settings
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then `KINESIM_*` environment variables using `__` between nested keys
//! (for example `KINESIM_ENGINE__STEP_SIZE=0.01`).

use crate::physics::math::Scalar;
use crate::physics::trajectory::TrajectoryOptions;
use directories::ProjectDirs;
use kinesim_macros::ConfigDefaults;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "KINESIM";

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug)]
pub enum ConfigError {
    /// A source could not be read or did not match the settings shape
    Load(config::ConfigError),
    Serialize(toml::ser::Error),
    Io(std::io::Error),
    /// No home directory to resolve the user config location from
    NoConfigDirectory,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Load(err) => write!(f, "Failed to load configuration: {err}"),
            ConfigError::Serialize(err) => write!(f, "Failed to serialize configuration: {err}"),
            ConfigError::Io(err) => write!(f, "Failed to write configuration: {err}"),
            ConfigError::NoConfigDirectory => {
                write!(f, "Could not determine the user configuration directory")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Load(err) => Some(err),
            ConfigError::Serialize(err) => Some(err),
            ConfigError::Io(err) => Some(err),
            ConfigError::NoConfigDirectory => None,
        }
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::Load(err)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialize(err)
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

#[derive(ConfigDefaults, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    #[default(EngineConfig::default())]
    pub engine: EngineConfig,

    #[default(OutputConfig::default())]
    pub output: OutputConfig,
}

#[derive(ConfigDefaults, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Seconds between trajectory frames
    #[default(0.02)]
    pub step_size: Scalar,

    /// Keep every n-th frame in chart series
    #[default(3)]
    pub chart_stride: usize,

    /// Optional cap on frames per trajectory. Unlimited when unset.
    #[default(None)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_frames: Option<usize>,

    /// Grounded frames at or before this time do not end a trajectory
    #[default(0.01)]
    pub landing_epsilon: Scalar,
}

#[derive(ConfigDefaults, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    #[default(OutputFormat::Table)]
    pub format: OutputFormat,

    /// Decimal places for table and CSV output
    #[default(3)]
    pub precision: usize,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl From<&EngineConfig> for TrajectoryOptions {
    fn from(engine: &EngineConfig) -> Self {
        Self {
            step: engine.step_size,
            max_frames: engine.max_frames.unwrap_or(usize::MAX),
            landing_grace: engine.landing_epsilon,
        }
    }
}

impl EngineConfig {
    pub fn trajectory_options(&self) -> TrajectoryOptions {
        TrajectoryOptions::from(self)
    }
}

impl SimulationConfig {
    /// Defaults, then `path` if given (it must exist), then the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, None)
    }

    /// Like [`Self::load`], reading overrides from `env` instead of the
    /// process environment when it is given.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let defaults = config::Config::try_from(&Self::default())?;
        let mut builder = config::Config::builder().add_source(defaults);

        if let Some(path) = path {
            builder = builder.add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(true),
            );
        }

        let environment = config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(env);

        Ok(builder.add_source(environment).build()?.try_deserialize()?)
    }

    /// Load from the platform config directory when a config file exists
    /// there, otherwise from defaults and the environment alone.
    pub fn load_from_user_config() -> Result<Self, ConfigError> {
        match Self::user_config_path() {
            Some(path) if path.exists() => {
                tracing::debug!("Loading configuration from {}", path.display());
                Self::load(Some(&path))
            }
            Some(path) => {
                tracing::debug!("No configuration at {}, using defaults", path.display());
                Self::load(None)
            }
            None => {
                tracing::debug!("No user configuration directory, using defaults");
                Self::load(None)
            }
        }
    }

    /// `<config dir>/kinesim/config.toml` on this platform
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "kinesim").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn save_to_user_config(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::user_config_path().ok_or(ConfigError::NoConfigDirectory)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.save(&path)?;
        Ok(path)
    }
}
