//! Scroll-into-view for the active cue.
//!
//! The controller never touches a document directly. Element lookups and
//! scroll requests go through [`ViewLocator`], which the presentation layer
//! implements against whatever it renders into.

/// Position of an element as seen by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementGeometry {
    /// Top edge relative to the viewport
    pub top: f64,
    /// Current vertical scroll offset of the element's own content
    pub scroll_top: f64,
}

impl ElementGeometry {
    pub fn new(top: f64, scroll_top: f64) -> Self {
        Self { top, scroll_top }
    }
}

/// How a scroll request should be animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Element lookup and scrolling in the presentation layer.
pub trait ViewLocator: Send {
    /// Look up an element by identifier. `None` if it is not rendered.
    fn element(&self, id: &str) -> Option<ElementGeometry>;

    /// Scroll the container `container_id` so its scroll offset becomes `top`.
    fn scroll_to(&mut self, container_id: &str, top: f64, behavior: ScrollBehavior);
}

/// Scroll offset that puts a cue `offset` pixels below the container top.
///
/// # Arguments
/// * `cue_top` - Viewport-relative top of the cue element
/// * `container_top` - Viewport-relative top of the container
/// * `container_scroll_top` - Current scroll offset of the container
/// * `offset` - Space to leave above the cue
pub fn scroll_target(
    cue_top: f64,
    container_top: f64,
    container_scroll_top: f64,
    offset: f64,
) -> f64 {
    (cue_top - container_top) + container_scroll_top - offset
}

/// Smoothly scroll a cue element into view inside its container.
///
/// Does nothing if either element is missing.
///
/// # Returns
/// The requested scroll offset, or `None` if nothing was scrolled
pub fn scroll_into_view(
    view: &mut dyn ViewLocator,
    cue_element_id: &str,
    container_element_id: &str,
    offset: f64,
) -> Option<f64> {
    let cue = view.element(cue_element_id)?;
    let container = view.element(container_element_id)?;

    let target = scroll_target(cue.top, container.top, container.scroll_top, offset);
    tracing::trace!(
        cue = cue_element_id,
        container = container_element_id,
        scroll_top = target,
        "scrolling cue into view"
    );
    view.scroll_to(container_element_id, target, ScrollBehavior::Smooth);

    Some(target)
}
