use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

use super::artwork::ArtWork;
use super::model::{Album, Catalog, Track};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: expected {field}, found end of file")]
    MissingLine { line: usize, field: &'static str },
    #[error("line {line}: {field} must be a non-negative integer, found {value:?}")]
    InvalidCount {
        line: usize,
        field: &'static str,
        value: String,
    },
    #[error("line {line}: expected a blank separator line, found {found:?}")]
    ExpectedSeparator { line: usize, found: String },
}

/// Load the catalog at `path`. Relative artwork and track paths are resolved
/// against the directory containing the catalog file.
pub fn load(path: &Path) -> Result<Catalog, CatalogError> {
    let file = File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));

    let catalog = parse(BufReader::new(file), base_dir).map_err(|e| match e {
        // Read errors mid-file carry no path; attach it here.
        CatalogError::Io { source, .. } => CatalogError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;

    let uncovered: Vec<&Path> = catalog
        .albums()
        .iter()
        .filter(|a| a.artwork.is_missing())
        .map(|a| a.artwork.path())
        .collect();
    info!(
        "loaded {} albums ({} tracks, {} without cover) from {}",
        catalog.len(),
        catalog.track_count(),
        uncovered.len(),
        path.display()
    );
    for cover in uncovered {
        debug!("placeholder cover for {}", cover.display());
    }
    Ok(catalog)
}

/// Parse a catalog from `reader`.
///
/// Format, one field per line:
///
/// ```text
/// <album count>
/// <album title>
/// <artist>
/// <artwork path>
/// <track count>
/// <track title>      (repeated track-count times,
/// <track path>        together with its path)
/// <blank line>
/// ```
///
/// The album block repeats album-count times. The separator after the last
/// album may be missing, and anything after the last album is ignored.
pub fn parse<R: BufRead>(reader: R, base_dir: &Path) -> Result<Catalog, CatalogError> {
    let mut lines = LineReader::new(reader);

    let num_albums = lines.count("album count")?;
    let mut albums = Vec::with_capacity(num_albums);

    for _ in 0..num_albums {
        let title = lines.field("album title")?;
        let artist = lines.field("artist")?;
        let artwork = base_dir.join(lines.field("artwork path")?);
        let num_tracks = lines.count("track count")?;

        let mut tracks = Vec::with_capacity(num_tracks);
        for _ in 0..num_tracks {
            let title = lines.field("track title")?;
            let location = base_dir.join(lines.field("track path")?);
            tracks.push(Track { title, location });
        }
        lines.separator()?;

        albums.push(Album {
            title,
            artist,
            artwork: ArtWork::resolve(&artwork),
            tracks,
        });
    }

    Ok(Catalog::new(albums))
}

/// Line cursor that remembers the 1-based number of the last line read.
///
/// Lines are split on raw bytes and decoded lossily, so a title saved in a
/// legacy 8-bit encoding shows replacement characters instead of failing the
/// load.
struct LineReader<R> {
    reader: R,
    buf: Vec<u8>,
    line: usize,
}

impl<R: BufRead> LineReader<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line: 0,
        }
    }

    fn next_line(&mut self) -> Result<Option<String>, CatalogError> {
        self.buf.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .map_err(|source| CatalogError::Io {
                path: PathBuf::new(),
                source,
            })?;
        if read == 0 {
            return Ok(None);
        }
        self.line += 1;

        let mut bytes = self.buf.as_slice();
        if let Some(rest) = bytes.strip_suffix(b"\n") {
            bytes = rest;
        }
        if let Some(rest) = bytes.strip_suffix(b"\r") {
            bytes = rest;
        }
        Ok(Some(String::from_utf8_lossy(bytes).into_owned()))
    }

    fn field(&mut self, field: &'static str) -> Result<String, CatalogError> {
        self.next_line()?.ok_or(CatalogError::MissingLine {
            line: self.line + 1,
            field,
        })
    }

    fn count(&mut self, field: &'static str) -> Result<usize, CatalogError> {
        let raw = self.field(field)?;
        raw.trim().parse().map_err(|_| CatalogError::InvalidCount {
            line: self.line,
            field,
            value: raw,
        })
    }

    fn separator(&mut self) -> Result<(), CatalogError> {
        match self.next_line()? {
            Some(l) if !l.trim().is_empty() => Err(CatalogError::ExpectedSeparator {
                line: self.line,
                found: l,
            }),
            _ => Ok(()),
        }
    }
}
