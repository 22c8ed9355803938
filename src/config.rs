//! Configuration file handling

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use keylight_core::{Color, FitMode};
use serde::{Deserialize, Serialize};

use crate::detection::BoardKind;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub device: DeviceConfig,
    pub sweep: SweepConfig,
}

impl Config {
    /// Get the config file path for this platform
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "keylight").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load config from file, or use the defaults if it doesn't exist
    pub fn load() -> Result<Self, Box<dyn Error>> {
        match Self::path() {
            Some(path) if path.exists() => {
                let contents = fs::read_to_string(&path)?;
                Ok(toml::from_str(&contents)?)
            },
            _ => Ok(Config::default()),
        }
    }

    /// Save config with header comments for new files
    pub fn save_with_header(&self) -> Result<PathBuf, Box<dyn Error>> {
        let path = Self::path().ok_or("could not determine config directory")?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let header = r#"# keylight configuration file
# board: auto or k70rgb
# fit: fit, fill or stretch

"#;
        let contents = toml::to_string_pretty(self)?;
        fs::write(&path, format!("{header}{contents}"))?;
        Ok(path)
    }

    pub fn board(&self) -> Result<BoardKind, String> {
        self.general.board.parse()
    }

    pub fn fit(&self) -> Result<FitMode, String> {
        self.general.fit.parse()
    }

    pub fn default_color(&self) -> Result<Color, String> {
        self.general.default_color.parse()
    }

    pub fn sweep_color(&self) -> Result<Color, String> {
        self.sweep.color.parse()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Board to drive ("auto" to detect)
    pub board: String,
    /// Image fit mode
    pub fit: String,
    /// Color for keys without an explicit color (hex)
    pub default_color: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            board: "auto".into(),
            fit: "fill".into(),
            default_color: "#ffffff".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// HID interface number of the lighting endpoint, if detection picks the wrong one
    pub interface: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Time each key stays lit
    #[serde(with = "humantime_serde")]
    pub delay: Duration,
    /// Color of the lit key (hex)
    pub color: String,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(150),
            color: "#ff0000".into(),
        }
    }
}
