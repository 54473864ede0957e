//! Log setup. The terminal belongs to the UI, so records go to a file.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

use env_logger::{Builder, Env, Target};

use crate::config::{self, LogSettings};

/// Initialize the global logger from `settings`. `RUST_LOG` overrides the
/// configured level. When no log file can be opened, records are dropped.
pub fn init(settings: &LogSettings) {
    let target = settings
        .file
        .clone()
        .or_else(config::default_log_path)
        .and_then(|path| match open_log_file(&path) {
            Ok(f) => Some(f),
            Err(e) => {
                eprintln!("shelf: cannot open log file {}: {e}", path.display());
                None
            }
        })
        .map(|f| Target::Pipe(Box::new(f)))
        .unwrap_or_else(|| Target::Pipe(Box::new(io::sink())));

    let _ = Builder::from_env(Env::default().default_filter_or(settings.level.as_str()))
        .target(target)
        .try_init();
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
