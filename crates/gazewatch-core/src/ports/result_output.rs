//! Result output port for writing classification results.

use crate::domain::FrameResult;

/// Port for outputting classification results.
pub trait ResultOutput: Send + Sync {
    /// Writes a single frame result.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write(&self, result: &FrameResult) -> anyhow::Result<()>;

    /// Flushes any buffered output.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    fn flush(&self) -> anyhow::Result<()>;
}
