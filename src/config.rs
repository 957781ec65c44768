//! Settings loaded from `config.toml`.
//!
//! The default file lives at `<config_dir>/gigflow-case-study/config.toml`.
//! A missing or broken default file falls back to built-in settings; a file
//! passed explicitly on the command line must load cleanly.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::diagram::DiagramOptions;
use crate::error::{Error, Result};
use crate::models::NavigationTab;
use crate::prototype::{TimerConfig, TimerPolicy, DEFAULT_SECONDS_PER_TICK, DEFAULT_TICK_INTERVAL};

const APP_DIR: &str = "gigflow-case-study";

const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
    pub prototype: PrototypeSettings,
    pub diagram: DiagramSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Tab id shown at startup
    pub start_tab: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            start_tab: NavigationTab::default().id().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrototypeSettings {
    pub timer_policy: TimerPolicy,
    pub tick_interval_ms: u64,
    pub simulated_seconds_per_tick: u64,
}

impl Default for PrototypeSettings {
    fn default() -> Self {
        Self {
            timer_policy: TimerPolicy::default(),
            tick_interval_ms: DEFAULT_TICK_INTERVAL.as_millis() as u64,
            simulated_seconds_per_tick: DEFAULT_SECONDS_PER_TICK,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramSettings {
    pub theme: String,
    pub ascii: bool,
}

impl Default for DiagramSettings {
    fn default() -> Self {
        let options = DiagramOptions::default();
        Self {
            theme: options.theme,
            ascii: options.ascii,
        }
    }
}

impl Settings {
    /// Check values serde cannot
    pub fn validate(&self) -> Result<()> {
        if NavigationTab::from_id(&self.ui.start_tab).is_none() {
            return Err(Error::config(format!(
                "unknown start_tab '{}'",
                self.ui.start_tab
            )));
        }
        if self.prototype.tick_interval_ms == 0 {
            return Err(Error::config("tick_interval_ms must be greater than zero"));
        }
        Ok(())
    }

    /// Apply command-line overrides on top of file values
    pub fn apply_overrides(&mut self, tab: Option<NavigationTab>, policy: Option<TimerPolicy>) {
        if let Some(tab) = tab {
            self.ui.start_tab = tab.id().to_string();
        }
        if let Some(policy) = policy {
            self.prototype.timer_policy = policy;
        }
    }

    pub fn start_tab(&self) -> NavigationTab {
        NavigationTab::from_id(&self.ui.start_tab).unwrap_or_default()
    }

    pub fn timer_config(&self) -> TimerConfig {
        TimerConfig {
            policy: self.prototype.timer_policy,
            interval: Duration::from_millis(self.prototype.tick_interval_ms.max(1)),
            seconds_per_tick: self.prototype.simulated_seconds_per_tick,
        }
    }

    pub fn diagram_options(&self) -> DiagramOptions {
        DiagramOptions {
            theme: self.diagram.theme.clone(),
            ascii: self.diagram.ascii,
        }
    }
}

/// Default config file location, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from an explicit path; every failure is an error
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&content)?;
    settings.validate()?;
    debug!("Loaded settings from {:?}", path);
    Ok(settings)
}

/// Load settings, falling back to defaults when the default file is unusable
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        return load_settings_from(path);
    }

    let Some(path) = default_config_path() else {
        debug!("No config directory on this platform, using defaults");
        return Ok(Settings::default());
    };

    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Ok(Settings::default());
    }

    match load_settings_from(&path) {
        Ok(settings) => Ok(settings),
        Err(e) => {
            warn!("Ignoring config {:?}: {}", path, e);
            Ok(Settings::default())
        }
    }
}
