//! The pull-based classification loop.
//!
//! Frames are pulled from a [`FrameSource`] one at a time, classified, and
//! written before the next frame is requested.

use std::collections::BTreeMap;

use anyhow::Result;
use tracing::{debug, warn};

use crate::classifier::AttentionClassifier;
use crate::domain::{AttentionState, FrameResult};
use crate::ports::{FrameSource, ProgressEvent, ProgressSink, ResultOutput};

/// Options for a classification session.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Include computed ratios in each result.
    pub include_metrics: bool,
}

/// Totals for a finished session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Frames classified.
    pub processed: usize,
    /// Frames skipped because they could not be read.
    pub skipped: usize,
    /// Classified frames that were not `LookingStraight`.
    pub inattentive: usize,
    /// Classified frames per state.
    pub counts: BTreeMap<AttentionState, usize>,
}

impl SessionSummary {
    /// Returns how many frames were classified as `state`.
    #[must_use]
    pub fn count(&self, state: AttentionState) -> usize {
        self.counts.get(&state).copied().unwrap_or(0)
    }
}

/// Runs every frame of `source` through `classifier`.
///
/// `timestamp` is called once per classified frame.
///
/// # Errors
///
/// Returns an error if writing or flushing output fails. Unreadable frames
/// are reported as `Skipped` events and do not stop the session.
pub fn run_session(
    source: &dyn FrameSource,
    classifier: &AttentionClassifier,
    output: &dyn ResultOutput,
    progress: &dyn ProgressSink,
    options: SessionOptions,
    timestamp: impl Fn() -> String,
) -> Result<SessionSummary> {
    let mut summary = SessionSummary::default();

    for (index, item) in source.frames().enumerate() {
        let record = match item {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping frame: {e:#}");
                progress.on_event(ProgressEvent::Skipped {
                    reason: format!("{e:#}"),
                });
                summary.skipped += 1;
                continue;
            }
        };

        progress.on_event(ProgressEvent::Started {
            source: record.source.clone(),
            index,
        });

        let classification = classifier.classify(record.face.as_ref());
        let state = classification.state;
        debug!("{}#{}: {}", record.source, record.index, state);

        let result = FrameResult::new(&record, timestamp(), classification, options.include_metrics);
        output.write(&result)?;

        summary.processed += 1;
        *summary.counts.entry(state).or_default() += 1;
        if !state.is_attentive() {
            summary.inattentive += 1;
        }

        progress.on_event(ProgressEvent::Classified { result });
    }

    output.flush()?;

    progress.on_event(ProgressEvent::Finished {
        processed: summary.processed,
        skipped: summary.skipped,
        inattentive: summary.inattentive,
    });

    Ok(summary)
}
