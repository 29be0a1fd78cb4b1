//! Attention classification.
//!
//! Pure geometry over a single face's landmarks; no state is carried between
//! frames.

mod attention;
pub mod geometry;

pub use attention::{classify, AttentionClassifier, ClassifierConfig};
