//! Frame records and classification results.

use serde::{Deserialize, Serialize};

use super::{AttentionMetrics, AttentionState, Classification, LandmarkFrame};

/// One item pulled from a frame source.
#[derive(Debug, Clone)]
pub struct FrameRecord {
    /// Where the frame came from (file path or `-` for stdin).
    pub source: String,
    /// Position of the frame within its source (0-based).
    pub index: usize,
    /// Landmarks of the first detected face, or `None` if no face was found.
    pub face: Option<LandmarkFrame>,
}

/// Serialized classification result for one frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameResult {
    /// Source of the frame.
    pub source: String,
    /// Position of the frame within its source.
    pub frame: usize,
    /// Timestamp of classification (ISO 8601).
    pub timestamp: String,
    /// Attention state.
    pub state: AttentionState,
    /// Human-readable status line.
    pub label: String,
    /// Computed ratios, if requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<AttentionMetrics>,
}

impl FrameResult {
    /// Builds a result for a classified frame.
    #[must_use]
    pub fn new(
        record: &FrameRecord,
        timestamp: String,
        classification: Classification,
        include_metrics: bool,
    ) -> Self {
        Self {
            source: record.source.clone(),
            frame: record.index,
            timestamp,
            state: classification.state,
            label: classification.state.label().to_string(),
            metrics: include_metrics.then_some(classification.metrics),
        }
    }
}
