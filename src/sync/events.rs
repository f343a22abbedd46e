//! Inbound events and their dispatch onto the controller.
//!
//! Two sources feed the controller: the media player (progress ticks,
//! play/pause notifications) and the presentation layer (cue clicks and
//! control buttons).

use serde::{Deserialize, Serialize};

use crate::sync::controller::SyncController;

/// Periodic playback position report from the player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressEvent {
    /// Elapsed playback time in seconds
    #[serde(rename = "playedSeconds")]
    pub played_seconds: f64,
}

impl ProgressEvent {
    pub fn new(played_seconds: f64) -> Self {
        Self { played_seconds }
    }
}

/// Notification from the media player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerEvent {
    /// Playback position update
    Progress(ProgressEvent),
    /// Playback started
    Play,
    /// Playback paused
    Pause,
}

/// Interaction from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// A cue was clicked, identified by position
    CueClicked { index: usize },
    /// A cue was clicked, identified by its timestamp
    TimestampClicked(String),
    /// Previous-cue button
    Previous,
    /// Next-cue button
    Next,
    /// Play/pause button
    TogglePlay,
    /// Follow/unfollow button
    ToggleFollowMode,
}

/// Whether handling an action changed the observable state.
///
/// Lets the presentation layer skip re-rendering after a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Changed,
    Unchanged,
}

impl SyncController {
    /// Apply a player notification.
    pub fn handle_player_event(&mut self, event: PlayerEvent) {
        match event {
            PlayerEvent::Progress(progress) => self.on_progress(progress),
            PlayerEvent::Play => self.play(),
            PlayerEvent::Pause => self.pause(),
        }
    }

    /// Apply a user action.
    ///
    /// # Returns
    /// `ActionOutcome::Changed` if the sync state differs afterwards
    pub fn handle_action(&mut self, action: UserAction) -> ActionOutcome {
        let before = self.snapshot();

        match action {
            UserAction::CueClicked { index } => self.seek_to_index(index),
            UserAction::TimestampClicked(time) => self.seek_to(&time),
            UserAction::Previous => self.go_to_previous(),
            UserAction::Next => self.go_to_next(),
            UserAction::TogglePlay => self.toggle_play(),
            UserAction::ToggleFollowMode => self.toggle_follow_mode(),
        }

        if self.snapshot() == before {
            ActionOutcome::Unchanged
        } else {
            ActionOutcome::Changed
        }
    }
}
