//! Application model: `App` holds the catalog, the browsed album, the
//! playback controller and the layout of the last drawn frame.

use log::debug;

use crate::audio::{AudioEngine, PlayOutcome, Player};
use crate::catalog::{Catalog, TrackRef};
use crate::layout::{self, FrameLayout, Metrics, Point};

/// The main application model.
pub struct App<E: AudioEngine> {
    pub catalog: Catalog,
    /// Album whose tracks are listed. Defaults to the first album.
    pub selected_album: usize,
    /// Latest diagnostic for the user, e.g. a missing song file.
    pub status: Option<String>,
    player: Player<E>,
    frame: Option<FrameLayout>,
}

impl<E: AudioEngine> App<E> {
    /// Create a new `App` browsing the first album, with nothing playing.
    pub fn new(catalog: Catalog, player: Player<E>) -> Self {
        Self {
            catalog,
            selected_album: 0,
            status: None,
            player,
            frame: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn playback(&self) -> crate::audio::PlaybackState {
        self.player.state()
    }

    pub fn playing(&self) -> Option<TrackRef> {
        self.player.state().track()
    }

    /// Layout used by the most recent frame, if one was drawn.
    pub fn frame(&self) -> Option<&FrameLayout> {
        self.frame.as_ref()
    }

    /// Recompute the layout for the next frame and keep it for hit-testing.
    pub fn relayout(&mut self, metrics: &Metrics) -> &FrameLayout {
        self.frame
            .insert(layout::compute(&self.catalog, self.selected_album, metrics))
    }

    /// Browse `album`. Playback is not affected.
    pub fn select_album(&mut self, album: usize) {
        if album < self.catalog.len() {
            self.selected_album = album;
        }
    }

    /// Play `track`; on success its album becomes the browsed one.
    pub fn play_track(&mut self, track: TrackRef) {
        let Some((_, t)) = self.catalog.track(track) else {
            return;
        };
        let location = t.location.clone();

        match self.player.play(&location, track) {
            PlayOutcome::Started => {
                self.status = None;
                self.selected_album = track.album;
            }
            PlayOutcome::MissingFile => {
                self.status = Some(format!("Missing song file: {}", location.display()));
            }
            PlayOutcome::Failed(e) => {
                self.status = Some(format!("Cannot play {}: {e}", location.display()));
            }
        }
    }

    /// Primary-button press at `p`.
    ///
    /// The album scan runs first and may switch the browsed album. The track
    /// scan then pairs the browsed album's tracks with the track rows of the
    /// last frame, which still belong to the previous album after a switch.
    pub fn click(&mut self, p: Point) {
        let Some(frame) = self.frame.as_ref() else {
            return;
        };

        let album_hit = frame.album_at(p);
        let row_hit = frame.track_at(p);

        if let Some(album) = album_hit {
            debug!("click selects album {album}");
            self.select_album(album);
        }

        let track_count = self
            .catalog
            .album(self.selected_album)
            .map_or(0, |a| a.tracks.len());
        if let Some(track) = row_hit.filter(|&t| t < track_count) {
            debug!("click plays track {track} of album {}", self.selected_album);
            self.play_track(TrackRef::new(self.selected_album, track));
        }
    }

    #[cfg(test)]
    pub(crate) fn player(&self) -> &Player<E> {
        &self.player
    }
}
