//! Audio-related small types.
//!
//! This module defines the playback state machine states, the outcome of a
//! play request and the audio error type.

use std::io;

use thiserror::Error;

use crate::catalog::TrackRef;

/// The playback state of the player.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Nothing is playing.
    #[default]
    Idle,
    /// A stream for this track was started and not stopped since.
    Playing(TrackRef),
}

impl PlaybackState {
    pub fn track(&self) -> Option<TrackRef> {
        match self {
            Self::Idle => None,
            Self::Playing(t) => Some(*t),
        }
    }
}

/// What a play request ended up doing.
#[derive(Debug)]
pub enum PlayOutcome {
    /// A new stream is playing the requested track.
    Started,
    /// The track file does not exist; no stream was started.
    MissingFile,
    /// The file exists but could not be opened or decoded.
    Failed(AudioError),
}

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio output: {0}")]
    Output(#[from] rodio::StreamError),
    #[error("cannot open file: {0}")]
    Open(#[from] io::Error),
    #[error("cannot decode file: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),
}
