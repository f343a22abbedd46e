//! Error types for the strict (`try_*`) API.
//!
//! The default API never fails: malformed timestamps degrade to zero and
//! impossible commands are silent no-ops. These types are what the strict
//! variants report instead.

/// Errors from strict timestamp parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimestampError {
    #[error("Timestamp is empty")]
    Empty,

    #[error("Timestamp '{text}' has {found} field(s), expected HH:MM:SS or HH:MM:SS,mmm")]
    WrongFieldCount { text: String, found: usize },

    #[error("Timestamp field '{field}' is not a number")]
    NotANumber { field: String },

    #[error("Timestamp field {name} = {value} is out of range")]
    OutOfRange { name: &'static str, value: u64 },
}

/// Errors from strict controller commands and cue list validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SyncError {
    #[error("Follow mode is disabled, click seeks are suppressed")]
    FollowModeDisabled,

    #[error("Player is not attached or not ready")]
    PlayerNotReady,

    #[error("Cue index {index} is out of range (cue list has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Cue {index} starts at {start}s, before the previous cue at {previous}s")]
    UnsortedCues {
        index: usize,
        start: f64,
        previous: f64,
    },

    #[error("Invalid timestamp: {0}")]
    Timestamp(#[from] TimestampError),
}
