use glam::{Quat, Vec3};
use retarget_core::{CanonicalBone, TargetNode};

use crate::binding::TargetPath;
use crate::synthesis::Keyframe;
use crate::tracks::KeyframeTrack;

#[derive(Debug, Clone, PartialEq)]
pub struct TrackMeta {
    /// Node path of the target node.
    pub node_name: String,
    pub target: TargetPath,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TrackData {
    Vector3(KeyframeTrack<Vec3>),
    Quaternion(KeyframeTrack<Quat>),
}

impl TrackData {
    #[must_use]
    pub fn duration(&self) -> f32 {
        match self {
            TrackData::Vector3(track) => track.duration(),
            TrackData::Quaternion(track) => track.duration(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            TrackData::Vector3(track) => track.len(),
            TrackData::Quaternion(track) => track.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A complete track: consumer-facing name, metadata and keyframe data.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// `"{nodePath}.rotation"` or `"{nodePath}.position"`.
    pub name: String,
    pub meta: TrackMeta,
    pub data: TrackData,
}

/// The keyframes of one canonical bone paired with its target node.
#[derive(Debug, Clone, PartialEq)]
pub struct BoneChannel {
    pub bone: CanonicalBone,
    pub node: TargetNode,
    pub keyframes: Vec<Keyframe>,
}

impl BoneChannel {
    #[must_use]
    pub fn has_translation(&self) -> bool {
        self.keyframes.iter().any(|k| k.translation.is_some())
    }
}

/// A finished, immutable retargeted clip.
///
/// `channels` follow the caller's bone order; `tracks` hold the same data in
/// playback form, two tracks at most per channel (position, then rotation).
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    pub name: String,
    pub duration: f32,
    pub channels: Vec<BoneChannel>,
    pub tracks: Vec<Track>,
}

impl AnimationClip {
    #[must_use]
    pub fn new(name: String, channels: Vec<BoneChannel>, tracks: Vec<Track>) -> Self {
        let duration = tracks
            .iter()
            .map(|t| t.data.duration())
            .fold(0.0_f32, f32::max);

        Self {
            name,
            duration,
            channels,
            tracks,
        }
    }

    #[must_use]
    pub fn channel(&self, bone: CanonicalBone) -> Option<&BoneChannel> {
        self.channels.iter().find(|c| c.bone == bone)
    }

    #[must_use]
    pub fn track(&self, name: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.name == name)
    }

    /// Animated bones, in clip order.
    pub fn bones(&self) -> impl Iterator<Item = CanonicalBone> + '_ {
        self.channels.iter().map(|c| c.bone)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
