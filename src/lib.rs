//! termlight - 搜索词提取与高亮
//!
//! 模块结构：
//! - kernel: 无终端依赖的核心（搜索词提取、tsquery 翻译、高亮、广播、防抖）
//! - kernel::services: 配置与异步适配
//! - tui: 终端前端（crossterm + ratatui）

pub mod kernel;
#[cfg(feature = "tui")]
pub mod tui;
