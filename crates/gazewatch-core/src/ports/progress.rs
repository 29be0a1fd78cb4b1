//! Progress reporting port for UI integration.

use crate::domain::FrameResult;

/// Events emitted while a frame stream is classified.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Classification started for a frame.
    Started {
        /// Source of the frame.
        source: String,
        /// Position of the frame within the stream (0-based).
        index: usize,
    },
    /// A frame was classified.
    Classified {
        /// The classification result.
        result: FrameResult,
    },
    /// A frame was skipped because it could not be read.
    Skipped {
        /// Reason for skipping.
        reason: String,
    },
    /// The stream is exhausted.
    Finished {
        /// Frames classified.
        processed: usize,
        /// Frames skipped.
        skipped: usize,
        /// Classified frames that were not `LookingStraight`.
        inattentive: usize,
    },
}

/// Port for receiving progress events.
pub trait ProgressSink: Send + Sync {
    /// Called when a progress event occurs.
    fn on_event(&self, event: ProgressEvent);
}
