use crate::error::{AppError, RuntimeError};
use base::{decimal::Rounding, DEFAULT_DECIMAL_PLACES};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    path::{Path, PathBuf},
};

/// Name of the configuration file looked up in the working directory and in
/// the system configuration directory.
pub const CONFIG_FILE_NAME: &str = "posekit.toml";

/// Posekit configuration.
#[derive(Debug)]
pub struct Config {
    /// Path to the configuration directory, if the system has one.
    pub(crate) sys_config_dir: Option<PathBuf>,
    /// File the user configuration was read from; `None` for the built-in
    /// defaults.
    pub(crate) source: Option<PathBuf>,
    /// User-defined configuration.
    pub(crate) user: UserConfig,
}

/// Options configured by user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Number of decimal places printed and used for validation.
    pub decimals: u32,
    /// Tie-breaking rule for printed values.
    pub rounding: Rounding,
    /// Defaults of the `follow` command.
    pub follow: FollowConfig,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMAL_PLACES,
            rounding: Rounding::HalfEven,
            follow: FollowConfig::default(),
        }
    }
}

/// Placement of the follow camera relative to the object.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowConfig {
    /// Distance behind the object.
    pub behind: f64,
    /// Height above the object.
    pub above: f64,
}

impl Default for FollowConfig {
    fn default() -> Self {
        Self {
            behind: 3.0,
            above: 1.0,
        }
    }
}

impl UserConfig {
    /// Load [`UserConfig`] from a .toml file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let string = std::fs::read_to_string(path).map_err(|err| {
            AppError::from_io_error(
                err,
                format!("Failed to read user configuration file: {}", path.display()),
            )
        })?;
        let config = Self::parse(&string).map_err(|err| {
            AppError::new(
                format!(
                    "Failed to parse user configuration file: {}",
                    path.display()
                ),
                Some(Box::new(err)),
            )
        })?;
        log::info!("    - Decimal places: {}", config.decimals);
        log::info!("    - Rounding: {}", config.rounding);
        log::info!(
            "    - Follow camera: {} behind, {} above",
            config.follow.behind,
            config.follow.above
        );
        Ok(config)
    }

    /// Parses a configuration from its toml text; missing keys take their
    /// default values.
    pub fn parse(text: &str) -> Result<Self, RuntimeError> { Ok(toml::from_str(text)?) }
}

impl Config {
    /// Loads the configuration.
    ///
    /// This function accepts a file path to the user-defined configuration
    /// file. If it's not set, the function tries to load `posekit.toml` from
    /// the current working directory, then from the system configuration
    /// directory. If neither exists, the built-in defaults are used.
    ///
    /// # Default configuration directory
    ///
    /// + On *nix system: "$XDG_CONFIG_HOME/posekit" or "$HOME/.config/posekit"
    ///
    /// + On windows system: `%APPDATA%\posekit`
    ///
    /// + On macos system: "$HOME/Library/Application Support/posekit"
    pub fn load_config(filepath: Option<&Path>) -> Result<Self, AppError> {
        log::info!("Loading configurations...");
        let sys_config_dir = dirs::config_dir().map(|dir| dir.join("posekit"));
        match &sys_config_dir {
            Some(dir) => log::info!("  - Sys configuration directory: {}", dir.display()),
            None => log::warn!("  - {}", RuntimeError::SysConfigDirNotFound),
        }

        if let Some(path) = filepath {
            log::info!("  Load user specified configuration from {}", path.display());
            return Ok(Self {
                user: UserConfig::load(path)?,
                source: Some(path.to_path_buf()),
                sys_config_dir,
            });
        }

        let cwd = std::env::current_dir().map_err(|err| {
            AppError::from_io_error(err, "Failed to get current working directory.")
        })?;
        let candidates = std::iter::once(cwd.join(CONFIG_FILE_NAME))
            .chain(sys_config_dir.as_ref().map(|dir| dir.join(CONFIG_FILE_NAME)));
        for candidate in candidates {
            if candidate.exists() {
                log::info!("  Load configuration from {}", candidate.display());
                return Ok(Self {
                    user: UserConfig::load(&candidate)?,
                    source: Some(candidate),
                    sys_config_dir,
                });
            }
        }

        log::info!("  No configuration file found, using defaults.");
        Ok(Self {
            sys_config_dir,
            source: None,
            user: UserConfig::default(),
        })
    }

    /// Returns the decimal places to use, preferring the given override.
    pub fn decimals(&self, requested: Option<u32>) -> u32 {
        requested.unwrap_or(self.user.decimals)
    }

    /// Returns the tie-breaking rule for printed values, preferring the given
    /// override.
    pub fn rounding(&self, requested: Option<Rounding>) -> Rounding {
        requested.unwrap_or(self.user.rounding)
    }

    /// Returns the follow camera placement.
    pub fn follow(&self) -> FollowConfig { self.user.follow }

    /// Serialises the user configuration back to toml.
    pub fn to_toml(&self) -> Result<String, AppError> {
        toml::to_string(&self.user).map_err(|err| {
            AppError::new(
                "Failed to serialize the configuration.",
                Some(Box::new(RuntimeError::from(err))),
            )
        })
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sys_config_dir = self
            .sys_config_dir
            .as_ref()
            .map_or(String::from("not found"), |dir| dir.display().to_string());
        let source = self
            .source
            .as_ref()
            .map_or(String::from("built-in defaults"), |path| {
                path.display().to_string()
            });
        write!(
            f,
            "Configuration directory: {}\nConfiguration source: {}\nDecimal places: {}\nRounding: \
             {}\nFollow camera: {} behind, {} above",
            sys_config_dir,
            source,
            self.user.decimals,
            self.user.rounding,
            self.user.follow.behind,
            self.user.follow.above
        )
    }
}
