use super::paths::get_cache_dir;
use crate::kernel::services::ports::settings::Settings;
use std::path::{Path, PathBuf};

const SETTINGS_DIR: &str = ".termlight";
const SETTINGS_FILE: &str = "setting.json";

pub type Result<T> = std::result::Result<T, SettingsError>;

#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Invalid settings: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

pub fn get_settings_path() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

pub fn ensure_settings_file() -> std::io::Result<PathBuf> {
    let path = get_settings_path().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine settings directory",
        )
    })?;
    write_default_settings(&path)?;
    Ok(path)
}

/// 文件不存在时写入默认配置
pub fn write_default_settings(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        let content =
            serde_json::to_string_pretty(&Settings::default()).unwrap_or_else(|_| "{}".to_string());
        std::fs::write(path, content)?;
    }
    Ok(())
}

pub fn load_settings_from(path: &Path) -> Result<Settings> {
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// 读取失败时记录日志并退回默认配置
pub fn load_settings() -> Settings {
    let Some(path) = get_settings_path() else {
        return Settings::default();
    };
    match load_settings_from(&path) {
        Ok(settings) => settings,
        Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            Settings::default()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "settings ignored");
            Settings::default()
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;
