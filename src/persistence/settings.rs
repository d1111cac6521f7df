use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "AppSettings::default_theme")]
    pub theme: Theme,
    // If None, the session flag lives under the OS temporary directory
    #[serde(default)]
    pub session_dir_override: Option<PathBuf>,
    #[serde(default = "AppSettings::default_show_grid")]
    pub show_grid: bool,
    #[serde(default = "AppSettings::default_window_size")]
    pub window_size: (f32, f32),
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: Self::default_theme(),
            session_dir_override: None,
            show_grid: Self::default_show_grid(),
            window_size: Self::default_window_size(),
        }
    }
}

impl AppSettings {
    fn config_dir() -> PathBuf {
        #[cfg(target_os = "macos")]
        {
            // ~/Library/Application Support/schema-atlas
            let home = std::env::var_os("HOME").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("~"));
            return home.join("Library").join("Application Support").join("schema-atlas");
        }
        #[cfg(target_os = "windows")]
        {
            if let Ok(appdata) = std::env::var("APPDATA") {
                return PathBuf::from(appdata).join("schema-atlas");
            }
            return PathBuf::from("schema-atlas");
        }
        #[cfg(all(unix, not(target_os = "macos")))]
        {
            if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
                return PathBuf::from(xdg).join("schema-atlas");
            }
            let home = std::env::var_os("HOME").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("~"));
            return home.join(".config").join("schema-atlas");
        }
    }

    pub fn settings_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::settings_path())
    }

    pub fn load_from(path: &std::path::Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let mut f = fs::File::open(path)?;
        let mut s = String::new();
        f.read_to_string(&mut s)?;
        let v: Self = serde_json::from_str(&s)?;
        Ok(v)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::settings_path())
    }

    pub fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let s = serde_json::to_string_pretty(self)?;
        let mut f = fs::File::create(path)?;
        f.write_all(s.as_bytes())?;
        Ok(())
    }

    /// Default session directory when no override is set: OS temporary directory.
    /// Example: {temp_dir}/schema-atlas
    pub fn session_default_dir() -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push("schema-atlas");
        p
    }

    pub fn session_dir(&self) -> PathBuf {
        if let Some(p) = &self.session_dir_override { return p.clone(); }
        Self::session_default_dir()
    }

    pub(crate) fn default_theme() -> Theme { Theme::Light }
    pub(crate) fn default_show_grid() -> bool { true }
    pub(crate) fn default_window_size() -> (f32, f32) { (1300.0, 800.0) }
}
