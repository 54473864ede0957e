use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/shelf/config.toml` or `~/.config/shelf/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SHELF__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogSettings,
    pub layout: LayoutSettings,
    pub playback: PlaybackSettings,
    pub ui: UiSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Catalog file used when no path is given on the command line.
    pub path: PathBuf,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("albums.txt"),
        }
    }
}

/// Screen placement of covers and tracks, in terminal cells.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Row of the first cover in every column.
    pub top: u16,
    /// Left edge of each album column.
    pub columns: Vec<u16>,
    /// How many albums fill a column before the next one starts.
    /// The last column takes all remaining albums.
    pub column_capacity: usize,
    pub cover_width: u16,
    pub cover_height: u16,
    /// Rows below each cover reserved for its title and artist.
    pub row_gap: u16,
    pub info_x: u16,
    pub info_y: u16,
    /// Rows between the top of the info block and the first track.
    pub track_list_offset: u16,
    pub track_row_height: u16,
    pub track_width: u16,
    pub track_height: u16,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            top: 1,
            columns: vec![2, 18],
            column_capacity: 3,
            cover_width: 12,
            cover_height: 6,
            row_gap: 3,
            info_x: 34,
            info_y: 1,
            track_list_offset: 4,
            track_row_height: 1,
            track_width: 40,
            track_height: 1,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// What happens to the current track when the requested one is missing.
    pub missing_file: MissingFilePolicy,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingFilePolicy {
    /// Stop the current track before checking the new file exists.
    #[default]
    #[serde(alias = "stop_first", alias = "stop")]
    StopFirst,
    /// Check the new file first; keep the current track if it is missing.
    #[serde(alias = "keep_playing", alias = "keep")]
    KeepPlaying,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Terminal window title.
    pub title: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            title: "Music Player".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Default filter, e.g. `info` or `shelf=debug`. `RUST_LOG` wins when set.
    pub level: String,
    /// Log file. Defaults to `$XDG_STATE_HOME/shelf/shelf.log`.
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
