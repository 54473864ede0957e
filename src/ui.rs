//! UI rendering helpers for the album shelf.
//!
//! Everything is drawn from the layout the app computed for this frame, in
//! three passes: background, covers and bars, then text on top.

use image::RgbaImage;
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect as Area,
    style::{Color, Modifier, Style},
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::audio::AudioEngine;
use crate::catalog::{Album, TrackRef};
use crate::layout::{EntityId, FrameLayout, Rect};

const BACKGROUND: Color = Color::Rgb(0x12, 0x12, 0x12);
const NOW_PLAYING_GREEN: Color = Color::Rgb(0x1D, 0xB9, 0x54);
const PLACEHOLDER_GRAY: Color = Color::Rgb(0x80, 0x80, 0x80);

/// Rows taken by the now-playing bar at the bottom of the screen.
const BAR_HEIGHT: u16 = 3;

/// Render the whole screen for the layout `app` computed last.
pub fn draw<E: AudioEngine>(frame: &mut Frame, app: &App<E>) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BACKGROUND)), area);

    let bar_height = BAR_HEIGHT.min(area.height);
    let content = Area {
        height: area.height - bar_height,
        ..area
    };
    let bar = Area {
        y: area.y + content.height,
        height: bar_height,
        ..area
    };

    if let Some(layout) = app.frame() {
        for (i, album) in app.catalog.albums().iter().enumerate() {
            if let Some(rect) = layout.rect(EntityId::Album(i)) {
                draw_album(frame, content, album, rect);
            }
        }
        if let Some(album) = app.catalog.album(layout.album) {
            draw_track_list(frame, content, layout, album, app.playing());
        }
    }

    draw_now_playing(frame, bar, app);
}

/// Text of the now-playing bar.
pub fn now_playing_text<E: AudioEngine>(app: &App<E>) -> String {
    let mut text = match app.playing().and_then(|t| app.catalog.track(t)) {
        Some((album, track)) => format!("Now Playing: {} - {}", track.title, album.artist),
        None => "Now Playing: None".to_string(),
    };
    if let Some(status) = &app.status {
        text.push_str(" • ");
        text.push_str(status);
    }
    text
}

fn draw_album(frame: &mut Frame, clip: Area, album: &Album, rect: Rect) {
    let cover = to_area(rect);
    match album.artwork.cover() {
        Some(c) => draw_cover(frame.buffer_mut(), cover.intersection(clip), cover, &c.pixels),
        None => frame.render_widget(
            Block::default().style(Style::default().bg(PLACEHOLDER_GRAY)),
            cover.intersection(clip),
        ),
    }

    let caption = Area {
        y: cover.bottom(),
        height: 1,
        ..cover
    };
    put_text(
        frame,
        clip,
        caption,
        &album.title,
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    );
    put_text(
        frame,
        clip,
        Area {
            y: caption.y.saturating_add(1),
            ..caption
        },
        &album.artist,
        Style::default().fg(Color::Gray),
    );
}

fn draw_track_list(
    frame: &mut Frame,
    clip: Area,
    layout: &FrameLayout,
    album: &Album,
    playing: Option<TrackRef>,
) {
    let x = layout.info.x.max(0.0) as u16;
    let y = layout.info.y.max(0.0) as u16;
    let width = clip.right().saturating_sub(x);
    let line = |dy: u16| Area::new(x, y.saturating_add(dy), width, 1);

    let white = Style::default().fg(Color::White);
    put_text(
        frame,
        clip,
        line(0),
        &format!("Album: {}", album.title),
        white.add_modifier(Modifier::BOLD),
    );
    put_text(
        frame,
        clip,
        line(1),
        &format!("Artist: {}", album.artist),
        Style::default().fg(Color::Gray),
    );
    put_text(
        frame,
        clip,
        line(2),
        &format!("Tracks: {}", album.tracks.len()),
        white,
    );

    for (i, track) in album.tracks.iter().enumerate() {
        let Some(rect) = layout.rect(EntityId::Track {
            album: layout.album,
            track: i,
        }) else {
            break;
        };
        let is_playing = playing == Some(TrackRef::new(layout.album, i));
        let style = if is_playing {
            Style::default().fg(NOW_PLAYING_GREEN).add_modifier(Modifier::BOLD)
        } else {
            white
        };
        put_text(
            frame,
            clip,
            to_area(rect),
            &format!("{}. {}", i + 1, track.title),
            style,
        );
    }
}

fn draw_now_playing<E: AudioEngine>(frame: &mut Frame, bar: Area, app: &App<E>) {
    if bar.is_empty() {
        return;
    }
    frame.render_widget(
        Block::default().style(Style::default().bg(NOW_PLAYING_GREEN)),
        bar,
    );

    let black = Style::default().fg(Color::Black);
    let middle = Area {
        x: bar.x + 2,
        y: bar.y + bar.height / 2,
        width: bar.width.saturating_sub(4),
        height: 1,
    };
    put_text(
        frame,
        bar,
        middle,
        &now_playing_text(app),
        black.add_modifier(Modifier::BOLD),
    );

    let hint = "[q] quit";
    let hint_width = hint.len() as u16;
    if middle.width > hint_width {
        put_text(
            frame,
            bar,
            Area {
                x: middle.right() - hint_width,
                width: hint_width,
                ..middle
            },
            hint,
            black,
        );
    }
}

/// Render one line of `text` into `area`, clipped to `clip`.
fn put_text(frame: &mut Frame, clip: Area, area: Area, text: &str, style: Style) {
    let area = area.intersection(clip);
    if area.is_empty() {
        return;
    }
    frame.render_widget(Paragraph::new(text).style(style), area);
}

/// Snap a layout rectangle onto the cell grid.
fn to_area(r: Rect) -> Area {
    let left = r.left.max(0.0);
    let top = r.top.max(0.0);
    let width = r.width() - (left - r.left);
    let height = r.height() - (top - r.top);
    Area::new(
        left as u16,
        top as u16,
        width.max(0.0) as u16,
        height.max(0.0) as u16,
    )
}

/// Draw `pixels` scaled to fit `cover`, two pixel rows per cell using upper
/// half blocks. Only cells inside `visible` are touched.
fn draw_cover(buf: &mut Buffer, visible: Area, cover: Area, pixels: &RgbaImage) {
    let (w, h) = pixels.dimensions();
    if w == 0 || h == 0 || cover.is_empty() {
        return;
    }
    let scale = (f32::from(cover.width) / w as f32).min(f32::from(cover.height) * 2.0 / h as f32);

    let sample = |sx: u16, sy: u16| -> Color {
        let x = ((f32::from(sx) + 0.5) / scale) as u32;
        let y = ((f32::from(sy) + 0.5) / scale) as u32;
        if x >= w || y >= h {
            return BACKGROUND;
        }
        let [r, g, b, a] = pixels.get_pixel(x, y).0;
        if a == 0 { BACKGROUND } else { Color::Rgb(r, g, b) }
    };

    for cy in visible.top()..visible.bottom() {
        for cx in visible.left()..visible.right() {
            let sx = cx - cover.x;
            let sy = (cy - cover.y) * 2;
            if let Some(cell) = buf.cell_mut((cx, cy)) {
                cell.set_char('▀')
                    .set_fg(sample(sx, sy))
                    .set_bg(sample(sx, sy + 1));
            }
        }
    }
}
