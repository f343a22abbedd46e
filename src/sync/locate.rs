//! Current-cue lookup.
//!
//! Cue `i` is active over `[start_i, start_{i+1})`; the last cue stays
//! active forever. Lookup returns the first cue, in list order, whose
//! interval contains the playback position.

use crate::cue::Cue;

/// Find the cue active at `current_time`.
///
/// Parses every timestamp on each call. Prefer [`CueTimeline`] when the
/// same list is queried repeatedly.
///
/// # Arguments
/// * `current_time` - Playback position in seconds
/// * `cues` - Cue list, expected sorted by start time
///
/// # Returns
/// The index of the active cue, or `None` if the list is empty or the
/// position precedes the first cue
pub fn locate_cue(current_time: f64, cues: &[Cue]) -> Option<usize> {
    let starts: Vec<f64> = cues.iter().map(Cue::start_seconds).collect();
    locate_in(&starts, current_time)
}

/// Cue start times, parsed once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CueTimeline {
    starts: Vec<f64>,
}

impl CueTimeline {
    pub fn new(cues: &[Cue]) -> Self {
        Self {
            starts: cues.iter().map(Cue::start_seconds).collect(),
        }
    }

    /// Same result as [`locate_cue`] over the cues this timeline was built from.
    pub fn locate(&self, current_time: f64) -> Option<usize> {
        locate_in(&self.starts, current_time)
    }

    /// Start time of the cue at `index` in seconds.
    pub fn start(&self, index: usize) -> Option<f64> {
        self.starts.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }
}

fn locate_in(starts: &[f64], current_time: f64) -> Option<usize> {
    starts.iter().enumerate().position(|(idx, &start)| {
        let end = starts.get(idx + 1).copied().unwrap_or(f64::INFINITY);
        current_time >= start && current_time < end
    })
}
