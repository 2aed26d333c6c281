//! Configuration structures loaded from `config.toml`

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GoalError;
use crate::storage;
use crate::store::DEFAULT_KEY;
use crate::theme::Palette;

/// File name looked up inside the data directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalsConfig {
    /// Where and under which key goals are persisted
    #[serde(default)]
    pub storage: StorageConfig,

    /// Main window geometry
    #[serde(default)]
    pub window: WindowConfig,

    /// Colours and template globs for the UI theme
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the goal slot (defaults to the platform data dir)
    pub data_dir: Option<PathBuf>,

    /// Slot key; the file is `<data_dir>/<key>.json`
    #[serde(default = "default_key")]
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            key: default_key(),
        }
    }
}

impl StorageConfig {
    /// The configured data directory, or the platform default.
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,

    #[serde(default)]
    pub resizable: bool,

    #[serde(default = "default_true")]
    pub decorations: bool,

    #[serde(default)]
    pub transparent: bool,

    /// Centre the window on the primary display at startup
    #[serde(default = "default_true")]
    pub center: bool,

    #[serde(default)]
    pub always_on_top: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
            resizable: false,
            decorations: true,
            transparent: false,
            center: true,
            always_on_top: false,
        }
    }
}

/// Theme configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Template globs scanned for utility classes
    #[serde(default = "default_content")]
    pub content: Vec<String>,

    /// Extra colours, or overrides of the stock ones, as `name = "#RRGGBB"`
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            content: default_content(),
            colors: BTreeMap::new(),
        }
    }
}

impl ThemeConfig {
    /// Stock palette with the configured colours applied on top.
    pub fn palette(&self) -> Result<Palette, GoalError> {
        let mut palette = Palette::ios();
        palette.extend_raw(&self.colors)?;
        Ok(palette)
    }
}

// Serde default functions
fn default_key() -> String {
    DEFAULT_KEY.to_string()
}

fn default_title() -> String {
    "长期目标".to_string()
}

fn default_width() -> u32 {
    400
}

fn default_height() -> u32 {
    600
}

fn default_true() -> bool {
    true
}

fn default_content() -> Vec<String> {
    vec![
        "./index.html".to_string(),
        "./src/**/*.{vue,js,ts,jsx,tsx}".to_string(),
        "./src-tauri/**/*.{html,js,ts,jsx,tsx}".to_string(),
    ]
}

/// Platform data directory for the app, or `./.longterm` when the platform
/// has none (e.g. a stripped-down container without `$HOME`).
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("longterm-goals"))
        .unwrap_or_else(|| PathBuf::from(".longterm"))
}

impl GoalsConfig {
    /// Load and validate config from a TOML file
    pub fn load(path: &Path) -> Result<Self, GoalError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| GoalError::io(path, source))?;
        let config: Self = toml::from_str(&content).map_err(|e| GoalError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load config if the file exists, otherwise return defaults.
    /// A file that exists but is invalid is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, GoalError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Check values that serde alone cannot.
    pub fn validate(&self) -> Result<(), GoalError> {
        storage::validate_key(&self.storage.key)?;
        if self.window.width == 0 || self.window.height == 0 {
            return Err(GoalError::InvalidWindow(format!(
                "size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        self.theme.palette()?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
