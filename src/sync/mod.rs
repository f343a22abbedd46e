//! Cue synchronization engine
//!
//! Keeps the active cue of a cue list in step with a media player and
//! routes presentation commands back to the player.
//!
//! # Architecture
//!
//! - `state`: `SyncState`, the observable session state
//! - `locate`: current-cue lookup (`locate_cue`, `CueTimeline`)
//! - `player`: the `PlayerHandle` trait the embedding application implements
//! - `controller`: `SyncController`, which owns state, player and view
//! - `events`: typed inbound events and their dispatch
//!
//! # Usage
//!
//! ```
//! use cuesync::sync::{PlayerHandle, ProgressEvent, SyncController};
//! use cuesync::{Cue, SyncOptions};
//!
//! struct Player;
//!
//! impl PlayerHandle for Player {
//!     fn seek_to(&mut self, _seconds: f64) {}
//! }
//!
//! let cues = vec![
//!     Cue::new("00:00:43,547", "Never gonna give you up"),
//!     Cue::new("00:00:45,284", "Never gonna let you down"),
//! ];
//! let mut controller = SyncController::new(cues, SyncOptions::default());
//! controller.attach_player(Box::new(Player));
//!
//! controller.on_progress(ProgressEvent::new(44.0));
//! assert_eq!(controller.current_index(), Some(0));
//!
//! controller.go_to_next();
//! assert_eq!(controller.current_index(), Some(1));
//! assert!(controller.is_playing());
//! ```

pub mod controller;
pub mod events;
pub mod locate;
pub mod player;
pub mod state;

pub use controller::SyncController;
pub use events::{ActionOutcome, PlayerEvent, ProgressEvent, UserAction};
pub use locate::{locate_cue, CueTimeline};
pub use player::PlayerHandle;
pub use state::SyncState;
