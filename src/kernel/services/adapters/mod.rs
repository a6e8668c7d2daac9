//! Service adapters: OS/runtime specific implementations (IO/async).

pub mod paths;
pub mod query_stream;
pub mod settings;

pub use paths::{ensure_log_dir, get_cache_dir, get_log_dir};
pub use query_stream::{spawn_term_stream, QueryInput, TermStream};
pub use settings::{
    ensure_settings_file, get_settings_path, load_settings, load_settings_from, SettingsError,
};
