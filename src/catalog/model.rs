use std::path::PathBuf;

use super::artwork::ArtWork;

/// A song in an album.
#[derive(Debug, Clone)]
pub struct Track {
    pub title: String,
    pub location: PathBuf,
}

/// A music album. Owns its tracks; their order is the display order.
#[derive(Debug)]
pub struct Album {
    pub title: String,
    pub artist: String,
    pub artwork: ArtWork,
    pub tracks: Vec<Track>,
}

/// Identity of a track inside a [`Catalog`]: album index, then track index.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TrackRef {
    pub album: usize,
    pub track: usize,
}

impl TrackRef {
    pub fn new(album: usize, track: usize) -> Self {
        Self { album, track }
    }
}

/// Ordered collection of albums, in file order.
#[derive(Debug, Default)]
pub struct Catalog {
    albums: Vec<Album>,
}

impl Catalog {
    pub fn new(albums: Vec<Album>) -> Self {
        Self { albums }
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn album(&self, index: usize) -> Option<&Album> {
        self.albums.get(index)
    }

    /// Resolve a [`TrackRef`] to its album and track.
    pub fn track(&self, r: TrackRef) -> Option<(&Album, &Track)> {
        let album = self.albums.get(r.album)?;
        let track = album.tracks.get(r.track)?;
        Some((album, track))
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    pub fn track_count(&self) -> usize {
        self.albums.iter().map(|a| a.tracks.len()).sum()
    }
}
