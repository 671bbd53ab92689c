//! Humanoid animation retargeting engine.
//!
//! Takes flat, already-parsed source tracks (BVH or glTF/VRMA style
//! `"{joint}.position"` / `"{joint}.quaternion"`), resolves them to canonical
//! humanoid bones through per-format alias tables, corrects them for the
//! source's coordinate convention and assembles an [`AnimationClip`] that
//! addresses the consumer's rig nodes.
//!
//! Pipeline: [`aliases`] → [`resolver`] → [`convention`] → [`synthesis`] →
//! [`assembler`], wrapped by [`Retargeter`].

pub mod aliases;
pub mod assembler;
pub mod binding;
pub mod clip;
pub mod convention;
pub mod input;
pub mod resolver;
pub mod retargeter;
pub mod settings;
pub mod synthesis;
pub mod tracks;

pub use aliases::{FormatSelection, SourceFormat, SplitJoint, aliases_for, split_joint};
pub use assembler::{ClipAssembler, assemble};
pub use binding::{TargetPath, node_track_name, rename_bone_track};
pub use clip::{AnimationClip, BoneChannel, Track, TrackData, TrackMeta};
pub use convention::{CoordinateTransform, SpecVersion, TRANSLATION_SCALE, transform};
pub use input::RawTrack;
pub use resolver::{ResolvedTracks, resolve};
pub use retargeter::Retargeter;
pub use settings::RetargetSettings;
pub use synthesis::{BoneKeyframes, Keyframe, Synthesizer, synthesize};
pub use tracks::{InterpolationMode, KeyframeTrack};
