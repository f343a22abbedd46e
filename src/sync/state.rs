//! Sync state.
//!
//! `SyncState` is what the presentation layer renders from: which cue is
//! highlighted, whether the player should be playing, and whether cue
//! clicks and auto-scroll are live.

use serde::Serialize;

/// Observable state of a sync session.
///
/// Owned by `SyncController`; callers get read access through
/// `SyncController::state` and change it through controller commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncState {
    /// Index of the active cue, `None` before the first cue is reached
    pub current_index: Option<usize>,
    /// Advisory play state for the external player
    pub is_playing: bool,
    /// Whether cue clicks seek the player and the active cue auto-scrolls
    pub is_follow_mode: bool,
}

impl SyncState {
    /// Initial state: no cue, paused, following.
    pub fn new() -> Self {
        Self {
            current_index: None,
            is_playing: false,
            is_follow_mode: true,
        }
    }

    /// Current index with `-1` standing for "no cue".
    pub fn index_or_sentinel(&self) -> i64 {
        self.current_index.map_or(-1, |index| index as i64)
    }

    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
    }

    pub fn play(&mut self) {
        self.is_playing = true;
    }

    pub fn pause(&mut self) {
        self.is_playing = false;
    }

    pub fn toggle_follow_mode(&mut self) {
        self.is_follow_mode = !self.is_follow_mode;
    }
}

impl Default for SyncState {
    fn default() -> Self {
        Self::new()
    }
}
