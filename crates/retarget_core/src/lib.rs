//! Foundational types shared by the retargeting crates.
//!
//! - [`CanonicalBone`]: the fixed, ordered set of humanoid joints the engine targets
//! - [`HumanoidRig`]: the target rig descriptor handed in by the consumer
//! - [`RetargetError`]: the error type for the whole workspace

pub mod bone;
pub mod errors;
pub mod rig;

pub use bone::CanonicalBone;
pub use errors::{Result, RetargetError};
pub use rig::{HumanoidRig, NodeHandle, RigNode, TargetNode};
