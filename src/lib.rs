//! Keep a timestamped cue list in step with a media player.
//!
//! - [`timecode`]: `HH:MM:SS,mmm` timestamps to and from seconds
//! - [`sync`]: current-cue lookup and the `SyncController`
//! - [`scroll`]: scroll-into-view behind the `ViewLocator` trait
//! - [`config`]: controller options, loadable from TOML

pub mod config;
pub mod cue;
pub mod error;
pub mod scroll;
pub mod sync;
pub mod timecode;

pub use config::{Config, SyncOptions};
pub use cue::{validate_cue_order, Cue};
pub use error::{SyncError, TimestampError};
pub use scroll::{scroll_into_view, ElementGeometry, ScrollBehavior, ViewLocator};
pub use sync::{
    locate_cue, ActionOutcome, PlayerEvent, PlayerHandle, ProgressEvent, SyncController,
    SyncState, UserAction,
};
pub use timecode::{format_seconds, parse_timestamp, try_parse_timestamp};
