//! Error Types
//!
//! This module defines the error type used across the retargeting crates.
//!
//! # Overview
//!
//! Most "nothing to do" situations are not errors at all: a bone whose aliases
//! match no track, a track without samples, or a rig without a node for an
//! animated bone simply drop that bone from the output. [`RetargetError`] is
//! reserved for input that would otherwise produce corrupt keyframes, and for
//! the small amount of parsing done at the configuration boundary.
//!
//! # Usage
//!
//! ```rust,ignore
//! use retarget_core::errors::{RetargetError, Result};
//!
//! fn check(count: usize) -> Result<()> {
//!     if count == 0 {
//!         return Err(RetargetError::invalid_track("hips.quaternion", "no samples"));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the retargeting engine.
#[derive(Error, Debug)]
pub enum RetargetError {
    // ========================================================================
    // Input Validation Errors
    // ========================================================================
    /// A raw track is malformed (bad component count, non-monotonic times, ...).
    #[error("Invalid track data in '{track}': {reason}")]
    InvalidTrackData {
        /// Name of the offending track
        track: String,
        /// What is wrong with it
        reason: String,
    },

    /// The bone order and the target node list do not line up.
    #[error("Rig mismatch: {bones} bones in hierarchy order but {nodes} target node slots")]
    RigMismatch {
        /// Length of the bone order
        bones: usize,
        /// Length of the target node list
        nodes: usize,
    },

    // ========================================================================
    // Vocabulary Errors
    // ========================================================================
    /// Name is not one of the canonical humanoid bones.
    #[error("Unknown canonical bone: {0}")]
    UnknownBone(String),

    /// Name is not a supported source format.
    #[error("Unknown source format: {0}")]
    UnknownFormat(String),

    /// Name is not a supported spec version.
    #[error("Unknown spec version: {0}")]
    UnknownSpecVersion(String),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RetargetError {
    /// Shorthand for [`RetargetError::InvalidTrackData`].
    pub fn invalid_track(track: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTrackData {
            track: track.into(),
            reason: reason.into(),
        }
    }
}

/// Alias for `Result<T, RetargetError>`.
pub type Result<T> = std::result::Result<T, RetargetError>;
