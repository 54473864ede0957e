use std::path::PathBuf;

use super::*;
use crate::catalog::{Album, ArtWork, Catalog, Track};

fn album(title: &str, tracks: usize) -> Album {
    Album {
        title: title.into(),
        artist: "Artist".into(),
        artwork: ArtWork::Missing {
            path: PathBuf::from("cover.png"),
        },
        tracks: (0..tracks)
            .map(|i| Track {
                title: format!("{title} {i}"),
                location: PathBuf::from(format!("{title}-{i}.mp3")),
            })
            .collect(),
    }
}

fn catalog(n: usize) -> Catalog {
    Catalog::new((0..n).map(|i| album(&format!("A{i}"), i + 1)).collect())
}

#[test]
fn rect_contains_is_open_on_every_edge() {
    let r = Rect::new(10.0, 20.0, 5.0, 4.0);
    assert!(r.contains(Point::new(12.0, 22.0)));

    assert!(!r.contains(Point::new(10.0, 22.0)));
    assert!(!r.contains(Point::new(15.0, 22.0)));
    assert!(!r.contains(Point::new(12.0, 20.0)));
    assert!(!r.contains(Point::new(12.0, 24.0)));
    assert!(!r.contains(Point::new(15.0, 24.0)));
}

#[test]
fn cell_centers_inside_a_rect_all_hit() {
    let r = Rect::new(2.0, 1.0, 3.0, 2.0);
    let mut hits = Vec::new();
    for row in 0..5u16 {
        for col in 0..8u16 {
            if r.contains(Point::cell_center(col, row)) {
                hits.push((col, row));
            }
        }
    }
    assert_eq!(hits, vec![(2, 1), (3, 1), (4, 1), (2, 2), (3, 2), (4, 2)]);
}

#[test]
fn six_albums_split_three_and_three() {
    let m = Metrics::default();
    let layout = compute(&catalog(6), 0, &m);

    let left = &layout.albums[0..3];
    let right = &layout.albums[3..6];

    assert!(left.iter().all(|r| r.left == m.columns[0]));
    assert!(right.iter().all(|r| r.left == m.columns[1]));

    for col in [left, right] {
        assert_eq!(col[0].top, m.top);
        for pair in col.windows(2) {
            assert!(pair[1].top > pair[0].top);
            assert_eq!(pair[1].top - pair[0].top, m.row_height());
        }
    }
    // Both columns start at the same height and share row spacing.
    for i in 0..3 {
        assert_eq!(left[i].top, right[i].top);
    }
}

#[test]
fn albums_beyond_six_keep_growing_the_last_column() {
    let m = Metrics::default();
    let layout = compute(&catalog(8), 0, &m);

    assert_eq!(layout.albums[7].left, m.columns[1]);
    assert_eq!(layout.albums[7].top, m.top + 4.0 * m.row_height());
}

#[test]
fn extra_columns_take_albums_in_fixed_splits() {
    let m = Metrics {
        columns: vec![0.0, 20.0, 40.0],
        column_capacity: 2,
        ..Metrics::default()
    };
    let layout = compute(&catalog(7), 0, &m);

    let xs: Vec<f32> = layout.albums.iter().map(|r| r.left).collect();
    assert_eq!(xs, vec![0.0, 0.0, 20.0, 20.0, 40.0, 40.0, 40.0]);
    assert_eq!(layout.albums[6].top, m.top + 2.0 * m.row_height());
}

#[test]
fn cover_rects_have_cover_size() {
    let m = Metrics::default();
    let layout = compute(&catalog(2), 0, &m);
    for r in &layout.albums {
        assert_eq!(r.width(), m.cover_width);
        assert_eq!(r.height(), m.cover_height);
    }
}

#[test]
fn only_the_browsed_album_tracks_are_laid_out() {
    let m = Metrics::default();
    let cat = catalog(4);
    let layout = compute(&cat, 2, &m);

    assert_eq!(layout.album, 2);
    assert_eq!(layout.tracks.len(), cat.albums()[2].tracks.len());
    assert_eq!(layout.info, Point::new(m.info_x, m.info_y));

    let first = layout.tracks[0];
    assert_eq!(first.left, m.info_x);
    assert_eq!(first.top, m.info_y + m.track_list_offset);
    assert_eq!(first.width(), m.track_width);
    for pair in layout.tracks.windows(2) {
        assert_eq!(pair[1].top - pair[0].top, m.track_row_height);
        assert_eq!(pair[1].left, pair[0].left);
    }
}

#[test]
fn rect_lookup_by_entity() {
    let m = Metrics::default();
    let layout = compute(&catalog(3), 1, &m);

    assert_eq!(layout.rect(EntityId::Album(2)), Some(layout.albums[2]));
    assert_eq!(layout.rect(EntityId::Album(3)), None);
    assert_eq!(
        layout.rect(EntityId::Track { album: 1, track: 1 }),
        Some(layout.tracks[1])
    );
    assert_eq!(layout.rect(EntityId::Track { album: 0, track: 0 }), None);
}

#[test]
fn hit_queries_return_first_match() {
    let m = Metrics::default();
    let layout = compute(&catalog(4), 3, &m);

    let on_album = Point::new(layout.albums[1].left + 1.0, layout.albums[1].top + 1.0);
    assert_eq!(layout.album_at(on_album), Some(1));
    assert_eq!(layout.track_at(on_album), None);

    let on_track = Point::new(layout.tracks[2].left + 1.0, layout.tracks[2].top + 0.5);
    assert_eq!(layout.track_at(on_track), Some(2));

    assert_eq!(layout.album_at(Point::new(-1.0, -1.0)), None);
}

#[test]
fn empty_catalog_lays_out_nothing() {
    let layout = compute(&Catalog::default(), 0, &Metrics::default());
    assert!(layout.albums.is_empty());
    assert!(layout.tracks.is_empty());
}
