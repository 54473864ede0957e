use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `SHELF__`), then an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("SHELF")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Load and validate settings for startup.
    ///
    /// A broken or degenerate config file is reported on stderr and replaced
    /// by the built-in shelf layout; the catalog path can still come from the
    /// command line.
    pub fn load_or_default() -> Self {
        let loaded = Self::load()
            .map_err(|e| format!("cannot read config: {e}"))
            .and_then(|s| s.validate().map(|()| s));
        loaded.unwrap_or_else(|msg| {
            eprintln!("shelf: {msg}; using the default shelf layout");
            Self::default()
        })
    }

    /// Reject layouts that would place nothing on screen.
    pub fn validate(&self) -> Result<(), String> {
        let l = &self.layout;
        if l.columns.is_empty() {
            return Err("layout.columns must list at least one column".to_string());
        }
        if l.column_capacity == 0 {
            return Err("layout.column_capacity must be >= 1".to_string());
        }
        if l.cover_width == 0 || l.cover_height == 0 {
            return Err("layout.cover_width and layout.cover_height must be >= 1".to_string());
        }
        if l.track_row_height == 0 {
            return Err("layout.track_row_height must be >= 1".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `SHELF_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("SHELF_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/shelf/config.toml`
/// or `~/.config/shelf/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", ".config").map(|d| d.join("shelf").join("config.toml"))
}

/// Compute the default log file under `$XDG_STATE_HOME/shelf/shelf.log`
/// or `~/.local/state/shelf/shelf.log`.
pub fn default_log_path() -> Option<PathBuf> {
    xdg_dir("XDG_STATE_HOME", ".local/state").map(|d| d.join("shelf").join("shelf.log"))
}

fn xdg_dir(var: &str, home_fallback: &str) -> Option<PathBuf> {
    if let Some(xdg) = env::var_os(var) {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(home_fallback))
    }
}
