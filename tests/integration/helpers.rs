//! Shared fixtures: demo cue list and recording collaborators.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use cuesync::{Cue, ElementGeometry, PlayerHandle, ScrollBehavior, ViewLocator};

/// The six-line demo lyric sheet.
pub fn demo_cues() -> Vec<Cue> {
    vec![
        Cue::new("00:00:43,547", "Never gonna give you up"),
        Cue::new("00:00:45,284", "Never gonna let you down"),
        Cue::new("00:00:47,845", "Never gonna run around and desert you"),
        Cue::new("00:00:51,397", "Never gonna make you cry"),
        Cue::new("00:00:53,727", "Never gonna say goodbye"),
        Cue::new("00:00:56,263", "Never gonna tell a lie and hurt you"),
    ]
}

/// Player that records every seek. Clones share the log.
#[derive(Clone, Default)]
pub struct MockPlayer {
    seeks: Arc<Mutex<Vec<f64>>>,
}

impl MockPlayer {
    pub fn seeks(&self) -> Vec<f64> {
        self.seeks.lock().unwrap().clone()
    }
}

impl PlayerHandle for MockPlayer {
    fn seek_to(&mut self, seconds: f64) {
        self.seeks.lock().unwrap().push(seconds);
    }
}

/// A scroll request seen by `MockView`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollRequest {
    pub container: String,
    pub top: f64,
    pub behavior: ScrollBehavior,
}

/// View with fixed element geometry that records scroll requests.
/// Clones share the log.
#[derive(Clone, Default)]
pub struct MockView {
    elements: HashMap<String, ElementGeometry>,
    scrolls: Arc<Mutex<Vec<ScrollRequest>>>,
}

impl MockView {
    /// A container at `top = 100` holding `count` cues laid out 50px apart,
    /// the first one at `top = 200`.
    pub fn lyric_list(container: &str, prefix: &str, count: usize) -> Self {
        let mut view = Self::default();
        view.elements
            .insert(container.to_string(), ElementGeometry::new(100.0, 0.0));
        for i in 0..count {
            view.elements.insert(
                format!("{prefix}{i}"),
                ElementGeometry::new(200.0 + 50.0 * i as f64, 0.0),
            );
        }
        view
    }

    pub fn scrolls(&self) -> Vec<ScrollRequest> {
        self.scrolls.lock().unwrap().clone()
    }

    pub fn scroll_tops(&self) -> Vec<f64> {
        self.scrolls().into_iter().map(|s| s.top).collect()
    }
}

impl ViewLocator for MockView {
    fn element(&self, id: &str) -> Option<ElementGeometry> {
        self.elements.get(id).copied()
    }

    fn scroll_to(&mut self, container_id: &str, top: f64, behavior: ScrollBehavior) {
        self.scrolls.lock().unwrap().push(ScrollRequest {
            container: container_id.to_string(),
            top,
            behavior,
        });
    }
}
