//! 跨平台目录
//!
//! - macOS: ~/Library/Caches
//! - Linux: $XDG_CACHE_HOME 或 ~/.cache
//! - Windows: %LOCALAPPDATA% 或 %APPDATA%

use std::path::PathBuf;

const APP_NAME: &str = "termlight";
const LOG_DIR: &str = "logs";

pub fn get_cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Caches"));
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
            return Some(PathBuf::from(xdg));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".cache"));
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(local) = std::env::var("LOCALAPPDATA") {
            return Some(PathBuf::from(local));
        }
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

/// 获取日志目录路径
pub fn get_log_dir() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(APP_NAME).join(LOG_DIR))
}

/// 确保日志目录存在
pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_log_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine log directory",
        )
    })?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
