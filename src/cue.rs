//! Cue data model.

use serde::{Deserialize, Serialize};

use crate::error::SyncError;
use crate::timecode::parse_timestamp;

/// One timestamped unit of displayed text, such as a lyric line.
///
/// A cue is active from its own timestamp until the next cue's timestamp,
/// so the order of a cue list matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cue {
    /// Start time as `HH:MM:SS` or `HH:MM:SS,mmm`
    pub time: String,
    /// Text shown while the cue is active
    pub text: String,
}

impl Cue {
    pub fn new(time: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            text: text.into(),
        }
    }

    /// Start time in seconds (lenient parse, malformed fields count as zero).
    pub fn start_seconds(&self) -> f64 {
        parse_timestamp(&self.time)
    }
}

/// Check that cue start times never decrease.
///
/// Lookup assumes a sorted list; matching on an unsorted one is undefined.
///
/// # Returns
/// `SyncError::UnsortedCues` for the first cue that starts before its predecessor
pub fn validate_cue_order(cues: &[Cue]) -> Result<(), SyncError> {
    let mut previous: Option<f64> = None;

    for (index, cue) in cues.iter().enumerate() {
        let start = cue.start_seconds();
        if let Some(previous) = previous {
            if start < previous {
                return Err(SyncError::UnsortedCues {
                    index,
                    start,
                    previous,
                });
            }
        }
        previous = Some(start);
    }

    Ok(())
}
