//! PlayerHandle trait.

/// A media player that can be told to seek.
///
/// Implemented by the embedding application around its real player.
/// The controller owns the handle once attached.
pub trait PlayerHandle: Send {
    /// Jump playback to `seconds`.
    fn seek_to(&mut self, seconds: f64);

    /// Whether the player can accept commands yet.
    ///
    /// Seeks sent to a player that is not ready are dropped.
    fn is_ready(&self) -> bool {
        true
    }
}
