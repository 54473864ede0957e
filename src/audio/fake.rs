//! Recording engine used by controller and click-dispatch tests.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::engine::{AudioEngine, PlayHandle};
use super::types::AudioError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    Started(usize, PathBuf),
    Stopped(usize),
}

#[derive(Default)]
pub(crate) struct FakeEngine {
    events: Rc<RefCell<Vec<Event>>>,
    next_id: usize,
    /// Paths whose playback fails as if the file were not decodable.
    undecodable: Vec<PathBuf>,
}

pub(crate) struct FakeHandle {
    id: usize,
    events: Rc<RefCell<Vec<Event>>>,
}

impl PlayHandle for FakeHandle {
    fn stop(&mut self) {
        self.events.borrow_mut().push(Event::Stopped(self.id));
    }
}

impl AudioEngine for FakeEngine {
    type Handle = FakeHandle;

    fn play_once(&mut self, path: &Path) -> Result<FakeHandle, AudioError> {
        if self.undecodable.iter().any(|p| p == path) {
            return Err(AudioError::Open(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "undecodable",
            )));
        }
        let id = self.next_id;
        self.next_id += 1;
        self.events
            .borrow_mut()
            .push(Event::Started(id, path.to_path_buf()));
        Ok(FakeHandle {
            id,
            events: self.events.clone(),
        })
    }
}

impl FakeEngine {
    pub(crate) fn with_undecodable(paths: Vec<PathBuf>) -> Self {
        Self {
            undecodable: paths,
            ..Self::default()
        }
    }

    pub(crate) fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    /// Streams started and not yet stopped.
    pub(crate) fn active_streams(&self) -> usize {
        let events = self.events.borrow();
        let started = events
            .iter()
            .filter(|e| matches!(e, Event::Started(..)))
            .count();
        started - (events.len() - started)
    }
}
