use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::AudioEngine;
use crate::layout::{Metrics, Point};
use crate::ui;

/// Main event loop: lay out and draw a frame, then handle at most one input
/// event. Returns `Ok(())` when the user quits.
pub fn run<E: AudioEngine>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    metrics: &Metrics,
    app: &mut App<E>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.relayout(metrics);
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if is_quit(key) {
                        break;
                    }
                }
                Event::Mouse(mouse) => handle_mouse(mouse, app),
                _ => {}
            }
        }
    }

    Ok(())
}

fn is_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn handle_mouse<E: AudioEngine>(mouse: MouseEvent, app: &mut App<E>) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        debug!("left click at {},{}", mouse.column, mouse.row);
        app.click(Point::cell_center(mouse.column, mouse.row));
    }
}
