use crate::catalog::Catalog;
use crate::config::LayoutSettings;

use super::geometry::{Point, Rect};

/// Fixed offsets and sizes the layout is computed from, in cell units.
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    /// Y of the first album row in every column.
    pub top: f32,
    /// X offset of each album column, left to right.
    pub columns: Vec<f32>,
    /// Albums placed in a column before moving to the next one. The last
    /// column takes every remaining album.
    pub column_capacity: usize,
    pub cover_width: f32,
    pub cover_height: f32,
    /// Space under a cover for its caption, before the next row.
    pub row_gap: f32,
    /// Origin of the album info block (title, artist, track count).
    pub info_x: f32,
    pub info_y: f32,
    /// Distance from `info_y` to the first track row.
    pub track_list_offset: f32,
    pub track_row_height: f32,
    pub track_width: f32,
    pub track_height: f32,
}

impl Metrics {
    /// Vertical distance between two album rows in the same column.
    pub fn row_height(&self) -> f32 {
        self.cover_height + self.row_gap
    }

    fn column_for(&self, index: usize) -> usize {
        let last = self.columns.len().saturating_sub(1);
        (index / self.column_capacity.max(1)).min(last)
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::from(&LayoutSettings::default())
    }
}

impl From<&LayoutSettings> for Metrics {
    fn from(s: &LayoutSettings) -> Self {
        Self {
            top: f32::from(s.top),
            columns: s.columns.iter().map(|&x| f32::from(x)).collect(),
            column_capacity: s.column_capacity,
            cover_width: f32::from(s.cover_width),
            cover_height: f32::from(s.cover_height),
            row_gap: f32::from(s.row_gap),
            info_x: f32::from(s.info_x),
            info_y: f32::from(s.info_y),
            track_list_offset: f32::from(s.track_list_offset),
            track_row_height: f32::from(s.track_row_height),
            track_width: f32::from(s.track_width),
            track_height: f32::from(s.track_height),
        }
    }
}

/// Something that occupies a rectangle on screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EntityId {
    Album(usize),
    Track { album: usize, track: usize },
}

/// Rectangles assigned during one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayout {
    /// Cover rectangle of every album, indexed like the catalog.
    pub albums: Vec<Rect>,
    /// The album whose tracks were laid out.
    pub album: usize,
    /// Origin of that album's info block.
    pub info: Point,
    /// Track row rectangles of `album`, in list order.
    pub tracks: Vec<Rect>,
}

impl FrameLayout {
    pub fn rect(&self, id: EntityId) -> Option<Rect> {
        match id {
            EntityId::Album(i) => self.albums.get(i).copied(),
            EntityId::Track { album, track } if album == self.album => {
                self.tracks.get(track).copied()
            }
            EntityId::Track { .. } => None,
        }
    }

    /// First album, in catalog order, whose cover contains `p`.
    pub fn album_at(&self, p: Point) -> Option<usize> {
        self.albums.iter().position(|r| r.contains(p))
    }

    /// First track row, in list order, that contains `p`.
    pub fn track_at(&self, p: Point) -> Option<usize> {
        self.tracks.iter().position(|r| r.contains(p))
    }
}

/// Lay out every album cover and the track list of `album`.
///
/// Albums fill the configured columns in catalog order; each column keeps its
/// own vertical cursor so rows line up with the same spacing everywhere.
/// Nothing scrolls: once the last column is reached it grows downward for as
/// long as there are albums.
pub fn compute(catalog: &Catalog, album: usize, m: &Metrics) -> FrameLayout {
    let mut cursors = vec![m.top; m.columns.len().max(1)];

    let albums = (0..catalog.len())
        .map(|i| {
            let col = m.column_for(i);
            let x = m.columns.get(col).copied().unwrap_or_default();
            let y = cursors[col];
            cursors[col] += m.row_height();
            Rect::new(x, y, m.cover_width, m.cover_height)
        })
        .collect();

    let list_top = m.info_y + m.track_list_offset;
    let tracks = catalog
        .album(album)
        .map(|a| {
            (0..a.tracks.len())
                .map(|j| {
                    let y = list_top + j as f32 * m.track_row_height;
                    Rect::new(m.info_x, y, m.track_width, m.track_height)
                })
                .collect()
        })
        .unwrap_or_default();

    FrameLayout {
        albums,
        album,
        info: Point::new(m.info_x, m.info_y),
        tracks,
    }
}
