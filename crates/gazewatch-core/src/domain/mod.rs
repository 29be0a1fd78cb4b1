//! Core domain types for attention classification.

mod attention;
mod landmark;
mod result;

pub use attention::{AttentionMetrics, AttentionState, Classification};
pub use landmark::{
    EyeRoles, FrameError, Landmark, LandmarkFrame, LandmarkRole, MESH_LANDMARK_COUNT,
    REFINED_MESH_LANDMARK_COUNT,
};
pub use result::{FrameRecord, FrameResult};
