//! Frame source port for pulling detector output one frame at a time.

use crate::domain::FrameRecord;

/// Port for reading landmark frames from a source.
///
/// Sources are pulled lazily: the next frame is read only when the caller
/// asks for it, so classification of one frame completes before the next is
/// fetched.
pub trait FrameSource: Send + Sync {
    /// Returns an iterator over frames from this source.
    ///
    /// # Errors
    ///
    /// Individual items may be errors if a frame fails to parse.
    fn frames(&self) -> Box<dyn Iterator<Item = anyhow::Result<FrameRecord>> + Send + '_>;

    /// Returns the total number of frames, if known.
    fn count_hint(&self) -> Option<usize>;
}
