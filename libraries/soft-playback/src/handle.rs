//! Media handle abstraction
//!
//! Abstracts the control surface of one rendered track so coordination and
//! progress tracking stay agnostic of the media technology behind it.

use crate::error::Result;
use soft_core::ResultEntry;

/// Control surface of one rendered track
///
/// Any player offering play/pause, a paused flag, a duration readable and a
/// read/write position satisfies the contract.
pub trait MediaHandle: Send {
    /// Start or resume playback
    ///
    /// # Returns
    /// * `Ok(())` - Playback was started (or at least requested)
    /// * `Err(_)` - The backend refused to play (autoplay policy, missing asset, ...)
    fn play(&mut self) -> Result<()>;

    /// Pause playback, keeping the current position
    fn pause(&mut self);

    /// Whether the handle is currently paused
    fn is_paused(&self) -> bool;

    /// Media duration in seconds, `None` until metadata is loaded
    fn duration(&self) -> Option<f64>;

    /// Current position in seconds
    fn current_time(&self) -> f64;

    /// Move to a position in seconds
    fn set_current_time(&mut self, secs: f64);
}

/// Observable notifications a handle reports to its host
///
/// The values they announce are read back from the handle itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    /// Duration became readable
    MetadataLoaded,
    /// Position advanced during playback
    TimeUpdate,
    /// Playback reached the end of the media
    Ended,
}

/// Creates one handle per rendered result entry
pub trait HandleFactory {
    fn create(&self, entry: &ResultEntry) -> Box<dyn MediaHandle>;
}

impl<F> HandleFactory for F
where
    F: Fn(&ResultEntry) -> Box<dyn MediaHandle>,
{
    fn create(&self, entry: &ResultEntry) -> Box<dyn MediaHandle> {
        self(entry)
    }
}
