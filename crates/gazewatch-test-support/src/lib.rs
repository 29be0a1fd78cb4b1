//! Test support utilities for gazewatch.
//!
//! Provides synthetic face builders, detector-output fixtures and mocks for
//! testing the classification pipeline.
//!
//! # Example
//!
//! ```
//! use gazewatch_test_support::{MockFrameSource, SyntheticFaceBuilder};
//!
//! // Create synthetic faces
//! let straight = SyntheticFaceBuilder::frontal().build();
//! let closed = SyntheticFaceBuilder::eyes_closed().build();
//!
//! // Create mock frame source; `None` is a frame without a face
//! let source = MockFrameSource::new(vec![Some(straight), Some(closed), None]);
//! ```

mod builders;
mod fixtures;
mod mocks;

pub use builders::SyntheticFaceBuilder;
pub use fixtures::{detector_line, detector_lines, no_face_line, write_frames};
pub use mocks::{MockFrameSource, MockProgressSink, MockResultOutput};
