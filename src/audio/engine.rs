//! The audio capability used by the player and its `rodio` implementation.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};

use super::types::AudioError;

/// A sound that is playing and can be stopped.
pub trait PlayHandle {
    fn stop(&mut self);
}

/// Loads sound files and starts non-looping playback.
pub trait AudioEngine {
    type Handle: PlayHandle;

    /// Load `path` and start playing it once from the beginning.
    fn play_once(&mut self, path: &Path) -> Result<Self::Handle, AudioError>;
}

/// Plays through the default output device. Each track gets its own `Sink`.
pub struct RodioEngine {
    stream: OutputStream,
}

impl RodioEngine {
    /// Open the default output stream.
    pub fn open() -> Result<Self, AudioError> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // rodio logs to stderr when OutputStream is dropped, which would land
        // on top of the UI.
        stream.log_on_drop(false);
        Ok(Self { stream })
    }
}

impl AudioEngine for RodioEngine {
    type Handle = Sink;

    fn play_once(&mut self, path: &Path) -> Result<Sink, AudioError> {
        let file = File::open(path)?;
        let source = Decoder::new(BufReader::new(file))?;

        let sink = Sink::connect_new(self.stream.mixer());
        sink.append(source);
        Ok(sink)
    }
}

impl PlayHandle for Sink {
    fn stop(&mut self) {
        Sink::stop(self);
    }
}
