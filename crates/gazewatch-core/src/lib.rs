//! gazewatch core - domain types, attention classifier and ports.
//!
//! This crate classifies a user's attention state (eyes closed, head turned or
//! tilted, gaze direction) from the facial landmarks of a single frame, and
//! defines the ports through which frames arrive and results leave.

pub mod classifier;
pub mod domain;
pub mod ports;
pub mod session;

pub use classifier::{classify, AttentionClassifier, ClassifierConfig};
pub use domain::{
    AttentionMetrics, AttentionState, Classification, EyeRoles, FrameError, FrameRecord,
    FrameResult, Landmark, LandmarkFrame, LandmarkRole, MESH_LANDMARK_COUNT,
    REFINED_MESH_LANDMARK_COUNT,
};
pub use ports::{FrameSource, ProgressEvent, ProgressSink, ResultOutput};
pub use session::{run_session, SessionOptions, SessionSummary};
