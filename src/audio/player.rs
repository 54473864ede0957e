use std::path::Path;

use log::{info, warn};

use crate::catalog::TrackRef;
use crate::config::MissingFilePolicy;

use super::engine::{AudioEngine, PlayHandle};
use super::types::{PlayOutcome, PlaybackState};

/// Playback controller: at most one stream is active at any time.
pub struct Player<E: AudioEngine> {
    engine: E,
    active: Option<E::Handle>,
    state: PlaybackState,
    policy: MissingFilePolicy,
}

impl<E: AudioEngine> Player<E> {
    pub fn new(engine: E, policy: MissingFilePolicy) -> Self {
        Self {
            engine,
            active: None,
            state: PlaybackState::Idle,
            policy,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Stop whatever is playing and start `path` once from the beginning.
    ///
    /// With [`MissingFilePolicy::StopFirst`] the current stream is stopped
    /// before `path` is checked, so a missing file leaves the player idle.
    /// With [`MissingFilePolicy::KeepPlaying`] a missing file changes nothing.
    pub fn play(&mut self, path: &Path, track: TrackRef) -> PlayOutcome {
        if self.policy == MissingFilePolicy::StopFirst {
            self.stop();
        }

        if !path.exists() {
            warn!("missing song file: {}", path.display());
            return PlayOutcome::MissingFile;
        }

        self.stop();
        match self.engine.play_once(path) {
            Ok(handle) => {
                info!("playing {}", path.display());
                self.active = Some(handle);
                self.state = PlaybackState::Playing(track);
                PlayOutcome::Started
            }
            Err(e) => {
                warn!("cannot play {}: {e}", path.display());
                PlayOutcome::Failed(e)
            }
        }
    }

    /// Stop the active stream, if any, and go idle.
    pub fn stop(&mut self) {
        if let Some(mut handle) = self.active.take() {
            handle.stop();
        }
        self.state = PlaybackState::Idle;
    }

    #[cfg(test)]
    pub(crate) fn engine(&self) -> &E {
        &self.engine
    }
}
