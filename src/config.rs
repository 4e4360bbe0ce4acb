use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

pub const DEFAULT_SETTINGS_FILE: &str = "sleepingSettings.json";
pub const PORT_ENV_VAR: &str = "SLEEPWAKE_WEB_PORT";
pub const DEFAULT_DYNMAP_DIR: &str = "./plugins/dynmap/web/";

pub const DEFAULT_FAV_ICON: &str = concat!(
    "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 16 16'%3E",
    "%3Ctext y='14' font-size='14'%3EZ%3C/text%3E%3C/svg%3E",
);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid web port {0:?}")]
    InvalidPort(String),
}

/// Auxiliary map toggle. Either a plain switch or a directory to serve.
///
/// Serializes back exactly as it was configured so it can be echoed through
/// `/status` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DynmapSetting {
    Toggle(bool),
    Path(String),
}

impl Default for DynmapSetting {
    fn default() -> Self {
        DynmapSetting::Toggle(false)
    }
}

// `null` in the settings file means the map is off.
fn dynmap_or_disabled<'de, D>(deserializer: D) -> Result<DynmapSetting, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<DynmapSetting>::deserialize(deserializer)?.unwrap_or_default())
}

impl DynmapSetting {
    /// Directory the map should be served from, if the toggle is on.
    ///
    /// `true` prefers the working-directory plugin folder and falls back to
    /// the one next to the executable.
    pub fn resolve_path(&self) -> Option<PathBuf> {
        match self {
            DynmapSetting::Toggle(false) => None,
            DynmapSetting::Path(path) => Some(PathBuf::from(path)),
            DynmapSetting::Toggle(true) => {
                let local = PathBuf::from(DEFAULT_DYNMAP_DIR);
                if local.exists() {
                    return Some(local);
                }
                let beside_exe = std::env::current_exe()
                    .ok()
                    .and_then(|exe| exe.parent().map(|dir| dir.join("../plugins/dynmap/web/")));
                Some(beside_exe.unwrap_or(local))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub server_name: String,
    pub login_message: String,
    pub web_port: u16,
    #[serde(deserialize_with = "dynmap_or_disabled")]
    pub web_serve_dynmap: DynmapSetting,
    pub fav_icon: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_name: "SleepingServer".to_string(),
            login_message: "...Waking server up, come back in a minute...".to_string(),
            web_port: 8123,
            web_serve_dynmap: DynmapSetting::default(),
            fav_icon: None,
        }
    }
}

impl Settings {
    /// Reads settings from a JSON file. A missing file yields defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut settings = if path.exists() {
            let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            info!("Loaded settings from {}", path.display());
            serde_json::from_str::<Settings>(&raw)?
        } else {
            debug!("No settings file at {}, using defaults", path.display());
            Settings::default()
        };

        if let Ok(port) = std::env::var(PORT_ENV_VAR) {
            settings.apply_port_override(&port)?;
        }

        Ok(settings)
    }

    pub fn apply_port_override(&mut self, raw: &str) -> Result<(), ConfigError> {
        self.web_port = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort(raw.to_string()))?;
        Ok(())
    }

    pub fn fav_icon(&self) -> &str {
        self.fav_icon.as_deref().unwrap_or(DEFAULT_FAV_ICON)
    }
}
