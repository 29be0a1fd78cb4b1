//! Mock implementations of core port traits.

use std::sync::{Arc, Mutex, PoisonError};

use gazewatch_core::domain::{FrameRecord, FrameResult, LandmarkFrame};
use gazewatch_core::ports::{FrameSource, ProgressEvent, ProgressSink, ResultOutput};

/// Mock implementation of `FrameSource` for testing.
///
/// Yields pre-built frames (or read errors) and tracks iteration for
/// assertions.
pub struct MockFrameSource {
    items: Vec<Result<FrameRecord, String>>,
    iteration_count: Arc<Mutex<usize>>,
}

impl MockFrameSource {
    /// Creates a new mock source; `None` entries are frames with no face.
    #[must_use]
    pub fn new(faces: Vec<Option<LandmarkFrame>>) -> Self {
        let items = faces
            .into_iter()
            .enumerate()
            .map(|(index, face)| {
                Ok(FrameRecord {
                    source: "mock".into(),
                    index,
                    face,
                })
            })
            .collect();
        Self {
            items,
            iteration_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Creates an empty mock source.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Appends an unreadable frame.
    #[must_use]
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.items.push(Err(message.into()));
        self
    }

    /// Returns the number of times the source has been iterated.
    #[must_use]
    pub fn iteration_count(&self) -> usize {
        *self
            .iteration_count
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl FrameSource for MockFrameSource {
    fn frames(&self) -> Box<dyn Iterator<Item = anyhow::Result<FrameRecord>> + Send + '_> {
        let count = Arc::clone(&self.iteration_count);
        if let Ok(mut c) = count.lock() {
            *c += 1;
        }
        Box::new(
            self.items
                .iter()
                .map(|item| item.clone().map_err(|e| anyhow::anyhow!(e))),
        )
    }

    fn count_hint(&self) -> Option<usize> {
        Some(self.items.len())
    }
}

/// Mock implementation of `ResultOutput` for testing.
///
/// Captures results for later assertions.
pub struct MockResultOutput {
    results: Arc<Mutex<Vec<FrameResult>>>,
    flush_count: Arc<Mutex<usize>>,
}

impl MockResultOutput {
    /// Creates a new mock output.
    #[must_use]
    pub fn new() -> Self {
        Self {
            results: Arc::new(Mutex::new(Vec::new())),
            flush_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Returns all captured results.
    #[must_use]
    pub fn results(&self) -> Vec<FrameResult> {
        self.results
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of times `flush()` was called.
    #[must_use]
    pub fn flush_count(&self) -> usize {
        *self
            .flush_count
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MockResultOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultOutput for MockResultOutput {
    fn write(&self, result: &FrameResult) -> anyhow::Result<()> {
        self.results
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(result.clone());
        Ok(())
    }

    fn flush(&self) -> anyhow::Result<()> {
        if let Ok(mut c) = self.flush_count.lock() {
            *c += 1;
        }
        Ok(())
    }
}

/// Mock implementation of `ProgressSink` for testing.
///
/// Captures events for later assertions.
pub struct MockProgressSink {
    events: Arc<Mutex<Vec<ProgressEvent>>>,
}

impl MockProgressSink {
    /// Creates a new mock progress sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all captured events.
    #[must_use]
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of `Started` events.
    #[must_use]
    pub fn started_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, ProgressEvent::Started { .. }))
            .count()
    }

    /// Returns the number of `Classified` events.
    #[must_use]
    pub fn classified_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, ProgressEvent::Classified { .. }))
            .count()
    }

    /// Returns the number of `Skipped` events.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, ProgressEvent::Skipped { .. }))
            .count()
    }

    /// Returns the final counts from the `Finished` event, if any.
    #[must_use]
    pub fn finished_counts(&self) -> Option<(usize, usize, usize)> {
        self.events().iter().find_map(|e| match e {
            ProgressEvent::Finished {
                processed,
                skipped,
                inattentive,
            } => Some((*processed, *skipped, *inattentive)),
            _ => None,
        })
    }
}

impl Default for MockProgressSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for MockProgressSink {
    fn on_event(&self, event: ProgressEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::SyntheticFaceBuilder;
    use gazewatch_core::AttentionState;

    #[test]
    fn test_mock_frame_source_empty() {
        let source = MockFrameSource::empty();
        assert_eq!(source.count_hint(), Some(0));
        assert_eq!(source.frames().count(), 0);
        assert_eq!(source.iteration_count(), 1);
    }

    #[test]
    fn test_mock_frame_source_with_frames_and_error() {
        let source = MockFrameSource::new(vec![Some(SyntheticFaceBuilder::frontal().build()), None])
            .with_error("truncated line");

        let items: Vec<_> = source.frames().collect();
        assert_eq!(items.len(), 3);
        assert!(items[0].as_ref().unwrap().face.is_some());
        assert_eq!(items[1].as_ref().unwrap().index, 1);
        assert!(items[2].as_ref().unwrap_err().to_string().contains("truncated"));
    }

    #[test]
    fn test_mock_result_output() {
        let output = MockResultOutput::new();

        let result = FrameResult {
            source: "mock".into(),
            frame: 0,
            timestamp: "2024-01-01T00:00:00Z".into(),
            state: AttentionState::LookingStraight,
            label: AttentionState::LookingStraight.label().into(),
            metrics: None,
        };

        output.write(&result).unwrap();
        output.flush().unwrap();

        assert_eq!(output.results().len(), 1);
        assert_eq!(output.results()[0].state, AttentionState::LookingStraight);
        assert_eq!(output.flush_count(), 1);
    }

    #[test]
    fn test_mock_progress_sink() {
        let sink = MockProgressSink::new();

        sink.on_event(ProgressEvent::Started {
            source: "mock".into(),
            index: 0,
        });

        sink.on_event(ProgressEvent::Finished {
            processed: 1,
            skipped: 0,
            inattentive: 1,
        });

        assert_eq!(sink.started_count(), 1);
        assert_eq!(sink.finished_counts(), Some((1, 0, 1)));
    }
}
