//! Mocap Retarget
//!
//! Umbrella crate re-exporting the retargeting engine.
//!
//! ```rust,ignore
//! use retarget::{CanonicalBone, HumanoidRig, RawTrack, Retargeter, RetargetSettings};
//!
//! let rig = HumanoidRig::from_bone_names([(CanonicalBone::Hips, "J_Bip_C_Hips")]);
//! let clip = Retargeter::new(RetargetSettings::default()).retarget(&tracks, &rig)?;
//! ```

pub use glam;
pub use retarget_animation as animation;
pub use retarget_core as core;

pub use retarget_animation::{
    AnimationClip, BoneChannel, BoneKeyframes, ClipAssembler, CoordinateTransform, FormatSelection,
    InterpolationMode, Keyframe, KeyframeTrack, RawTrack, RetargetSettings, Retargeter, SourceFormat,
    SpecVersion, SplitJoint, Synthesizer, TRANSLATION_SCALE, TargetPath, Track, TrackData, TrackMeta,
    aliases_for, assemble, resolve, split_joint, synthesize, transform,
};
pub use retarget_core::{CanonicalBone, HumanoidRig, NodeHandle, Result, RetargetError, TargetNode};
