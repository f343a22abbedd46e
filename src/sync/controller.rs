//! The sync controller.
//!
//! Reconciles player progress with the cue list and turns presentation
//! commands into player seeks. Every decision reads the controller's own
//! fields at call time, so a command never acts on a stale follow-mode or
//! index value.

use std::fmt;

use crate::config::SyncOptions;
use crate::cue::{validate_cue_order, Cue};
use crate::error::SyncError;
use crate::scroll::{scroll_into_view, ViewLocator};
use crate::sync::events::ProgressEvent;
use crate::sync::locate::CueTimeline;
use crate::sync::player::PlayerHandle;
use crate::sync::state::SyncState;
use crate::timecode::{parse_timestamp, try_parse_timestamp};

/// Keeps a cue list in step with a media player.
///
/// Commands that cannot apply (player missing, index out of range, follow
/// mode off) are silent no-ops. The `try_*` variants report why instead.
pub struct SyncController {
    cues: Vec<Cue>,
    timeline: CueTimeline,
    state: SyncState,
    options: SyncOptions,
    player: Option<Box<dyn PlayerHandle>>,
    view: Option<Box<dyn ViewLocator>>,
}

impl SyncController {
    /// Create a controller over `cues`.
    ///
    /// The list is not validated. Lookup on an unsorted list is undefined;
    /// such a list is logged as a warning. Use [`SyncController::try_new`]
    /// to reject it instead.
    pub fn new(cues: Vec<Cue>, options: SyncOptions) -> Self {
        if let Err(err) = validate_cue_order(&cues) {
            tracing::warn!(%err, "cue list is not sorted by time, cue lookup is undefined");
        }
        Self::build(cues, options)
    }

    /// Create a controller, failing if cue start times ever decrease.
    pub fn try_new(cues: Vec<Cue>, options: SyncOptions) -> Result<Self, SyncError> {
        validate_cue_order(&cues)?;
        Ok(Self::build(cues, options))
    }

    fn build(cues: Vec<Cue>, options: SyncOptions) -> Self {
        Self {
            timeline: CueTimeline::new(&cues),
            cues,
            state: SyncState::new(),
            options,
            player: None,
            view: None,
        }
    }

    // === Collaborators ===

    /// Hand the controller the player it should drive.
    pub fn attach_player(&mut self, player: Box<dyn PlayerHandle>) {
        self.player = Some(player);
    }

    /// Take the player back. Seeks become no-ops until another is attached.
    pub fn detach_player(&mut self) -> Option<Box<dyn PlayerHandle>> {
        self.player.take()
    }

    /// Hand the controller the view used for auto-scroll.
    pub fn attach_view(&mut self, view: Box<dyn ViewLocator>) {
        self.view = Some(view);
    }

    /// Take the view back. Auto-scroll stops until another is attached.
    pub fn detach_view(&mut self) -> Option<Box<dyn ViewLocator>> {
        self.view.take()
    }

    /// Swap in a new cue list and start a fresh session.
    ///
    /// State returns to its initial values; attached collaborators stay.
    pub fn replace_cues(&mut self, cues: Vec<Cue>) {
        if let Err(err) = validate_cue_order(&cues) {
            tracing::warn!(%err, "cue list is not sorted by time, cue lookup is undefined");
        }
        self.timeline = CueTimeline::new(&cues);
        self.cues = cues;
        self.state = SyncState::new();
        if self.timeline.is_empty() {
            tracing::debug!("cue list replaced with an empty list, state reset");
        } else {
            tracing::debug!(cues = self.timeline.len(), "cue list replaced, state reset");
        }
    }

    // === Observable state ===

    /// Current state, borrowed.
    pub fn state(&self) -> &SyncState {
        &self.state
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> SyncState {
        self.state
    }

    /// The cue list in lookup order.
    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    /// Options this controller was built with.
    pub fn options(&self) -> &SyncOptions {
        &self.options
    }

    /// Index of the active cue, `None` before the first match.
    pub fn current_index(&self) -> Option<usize> {
        self.state.current_index
    }

    /// The active cue, if any.
    pub fn current_cue(&self) -> Option<&Cue> {
        self.state.current_index.and_then(|index| self.cues.get(index))
    }

    /// Advisory play state.
    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    /// Whether clicks seek and progress auto-scrolls.
    pub fn is_follow_mode(&self) -> bool {
        self.state.is_follow_mode
    }

    /// Element id of the cue at `index` in the presentation layer.
    pub fn cue_element_id(&self, index: usize) -> String {
        self.options.cue_element_id(index)
    }

    /// Whether `go_to_previous` would move.
    pub fn can_go_previous(&self) -> bool {
        matches!(self.state.current_index, Some(index) if index > 0)
    }

    /// Whether `go_to_next` would move.
    pub fn can_go_next(&self) -> bool {
        self.next_index() < self.timeline.len()
    }

    fn next_index(&self) -> usize {
        self.state.current_index.map_or(0, |index| index + 1)
    }

    // === Player progress ===

    /// Track the player's position.
    ///
    /// Moves the current index to the cue active at `event.played_seconds`.
    /// Positions with no active cue leave the index alone, so gaps before
    /// the first cue do not clear the highlight. Runs regardless of follow
    /// mode; only the auto-scroll side effect is gated by it.
    pub fn on_progress(&mut self, event: ProgressEvent) {
        let Some(index) = self.timeline.locate(event.played_seconds) else {
            tracing::trace!(seconds = event.played_seconds, "no cue at position");
            return;
        };

        if self.state.current_index == Some(index) {
            return;
        }

        tracing::debug!(index, seconds = event.played_seconds, "current cue changed");
        self.state.current_index = Some(index);

        if self.state.is_follow_mode && self.options.auto_scroll {
            self.scroll_to_cue(index);
        }
    }

    fn scroll_to_cue(&mut self, index: usize) {
        let Some(view) = self.view.as_deref_mut() else {
            return;
        };
        scroll_into_view(
            view,
            &self.options.cue_element_id(index),
            &self.options.scroll_container_id,
            self.options.scroll_offset,
        );
    }

    // === Seeking ===

    /// Seek the player to a cue timestamp.
    ///
    /// No-op while follow mode is off or when no ready player is attached.
    /// On success the play state becomes playing.
    pub fn seek_to(&mut self, time: &str) {
        if !self.state.is_follow_mode {
            tracing::debug!(time, "seek suppressed, follow mode is off");
            return;
        }
        if let Err(err) = self.seek_seconds(parse_timestamp(time)) {
            tracing::debug!(time, %err, "seek suppressed");
        }
    }

    /// Strict [`seek_to`](Self::seek_to): the timestamp must be well formed
    /// and every suppressed case is reported.
    pub fn try_seek_to(&mut self, time: &str) -> Result<(), SyncError> {
        if !self.state.is_follow_mode {
            return Err(SyncError::FollowModeDisabled);
        }
        let seconds = try_parse_timestamp(time)?;
        self.seek_seconds(seconds)
    }

    /// Seek the player to the cue at `index` and make it current.
    ///
    /// Out-of-range indexes are ignored. The player is never sought while
    /// follow mode is off. In that case `click_seek_respects_follow_mode`
    /// decides between a full no-op (set) and moving only the index (unset).
    pub fn seek_to_index(&mut self, index: usize) {
        if let Err(err) = self.try_seek_to_index(index) {
            tracing::debug!(index, %err, "seek to cue suppressed");
        }
    }

    /// Strict [`seek_to_index`](Self::seek_to_index).
    pub fn try_seek_to_index(&mut self, index: usize) -> Result<(), SyncError> {
        let seconds = self
            .timeline
            .start(index)
            .ok_or(SyncError::IndexOutOfRange {
                index,
                len: self.cues.len(),
            })?;

        if !self.state.is_follow_mode {
            if self.options.click_seek_respects_follow_mode {
                return Err(SyncError::FollowModeDisabled);
            }
            // Ungated: highlight the cue but leave the player alone
            tracing::debug!(index, "follow mode is off, index moved without seeking");
            self.state.current_index = Some(index);
            return Ok(());
        }

        self.seek_seconds(seconds)?;
        self.state.current_index = Some(index);
        Ok(())
    }

    fn seek_seconds(&mut self, seconds: f64) -> Result<(), SyncError> {
        match self.player.as_deref_mut() {
            Some(player) if player.is_ready() => player.seek_to(seconds),
            _ => return Err(SyncError::PlayerNotReady),
        }

        tracing::debug!(seconds, "seek issued");
        self.state.is_playing = true;
        Ok(())
    }

    /// Step back one cue. No-op at the first cue or with no current cue.
    pub fn go_to_previous(&mut self) {
        if let Some(index) = self.state.current_index {
            if index > 0 {
                self.seek_to_index(index - 1);
            }
        }
    }

    /// Step forward one cue. No-op at the last cue; with no current cue,
    /// goes to the first.
    pub fn go_to_next(&mut self) {
        let next = self.next_index();
        if next < self.timeline.len() {
            self.seek_to_index(next);
        }
    }

    // === Modes ===

    pub fn toggle_follow_mode(&mut self) {
        self.state.toggle_follow_mode();
        tracing::debug!(follow = self.state.is_follow_mode, "follow mode toggled");
    }

    /// Flip the advisory play state. The player itself is not touched.
    pub fn toggle_play(&mut self) {
        self.state.toggle_play();
    }

    pub fn play(&mut self) {
        self.state.play();
    }

    pub fn pause(&mut self) {
        self.state.pause();
    }

    /// Set the play state directly.
    pub fn set_playing(&mut self, playing: bool) {
        self.state.is_playing = playing;
    }

    /// Set the current index without seeking. Out-of-range indexes are ignored.
    pub fn set_current_index(&mut self, index: Option<usize>) {
        match index {
            Some(i) if i >= self.timeline.len() => {
                tracing::debug!(index = i, "current index out of range, ignored");
            }
            _ => self.state.current_index = index,
        }
    }
}

impl fmt::Debug for SyncController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncController")
            .field("cues", &self.cues.len())
            .field("state", &self.state)
            .field("options", &self.options)
            .field("player_attached", &self.player.is_some())
            .field("view_attached", &self.view.is_some())
            .finish()
    }
}
