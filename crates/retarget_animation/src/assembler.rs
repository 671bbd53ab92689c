//! Clip Assembler
//!
//! Pairs synthesized per-bone keyframes with the consumer's target nodes and
//! produces the finished [`AnimationClip`].
//!
//! Correspondence is strictly positional: `target_nodes[i]` is the node for
//! `bone_order[i]`. Keyframes are looked up by bone, never by their position
//! among the animated bones, so bones without keyframes cannot shift the
//! pairing of the bones after them.

use glam::{Quat, Vec3};
use retarget_core::{CanonicalBone, Result, RetargetError, TargetNode};
use rustc_hash::FxHashSet;

use crate::binding::{TargetPath, node_track_name};
use crate::clip::{AnimationClip, BoneChannel, Track, TrackData, TrackMeta};
use crate::synthesis::{BoneKeyframes, Keyframe};
use crate::tracks::{InterpolationMode, KeyframeTrack};

/// Default clip name.
pub const DEFAULT_CLIP_NAME: &str = "retargeted";

/// Clip assembly options.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipAssembler {
    pub name: String,
    pub interpolation: InterpolationMode,
}

impl Default for ClipAssembler {
    fn default() -> Self {
        Self {
            name: DEFAULT_CLIP_NAME.to_string(),
            interpolation: InterpolationMode::default(),
        }
    }
}

impl ClipAssembler {
    #[must_use]
    pub fn new(name: impl Into<String>, interpolation: InterpolationMode) -> Self {
        Self {
            name: name.into(),
            interpolation,
        }
    }

    /// Builds the clip.
    ///
    /// A bone is included only when it has keyframes *and* a target node.
    /// Fails with [`RetargetError::RigMismatch`] if the two orderings differ in
    /// length.
    pub fn assemble(
        &self,
        keyframes: &BoneKeyframes,
        bone_order: &[CanonicalBone],
        target_nodes: &[Option<TargetNode>],
    ) -> Result<AnimationClip> {
        if bone_order.len() != target_nodes.len() {
            return Err(RetargetError::RigMismatch {
                bones: bone_order.len(),
                nodes: target_nodes.len(),
            });
        }

        let mut seen = FxHashSet::default();
        let mut channels = Vec::new();
        let mut tracks = Vec::new();

        for (&bone, target) in bone_order.iter().zip(target_nodes) {
            if !seen.insert(bone) {
                log::warn!("bone '{bone}' appears more than once in the bone order; keeping the first");
                continue;
            }
            let Some(keys) = keyframes.get(&bone) else {
                continue;
            };
            let Some(node) = target else {
                log::debug!("bone '{bone}' is animated but the rig has no node for it; skipped");
                continue;
            };

            if let Some(track) = self.position_track(node, keys) {
                tracks.push(track);
            }
            tracks.push(self.rotation_track(node, keys));

            channels.push(BoneChannel {
                bone,
                node: node.clone(),
                keyframes: keys.clone(),
            });
        }

        Ok(AnimationClip::new(self.name.clone(), channels, tracks))
    }

    fn rotation_track(&self, node: &TargetNode, keys: &[Keyframe]) -> Track {
        let times = keys.iter().map(|k| millis_to_seconds(k.time_ms)).collect();
        let values: Vec<Quat> = keys.iter().map(|k| k.rotation).collect();
        make_track(
            node,
            TargetPath::Rotation,
            TrackData::Quaternion(KeyframeTrack::new(times, values, self.interpolation)),
        )
    }

    fn position_track(&self, node: &TargetNode, keys: &[Keyframe]) -> Option<Track> {
        let (times, values): (Vec<f32>, Vec<Vec3>) = keys
            .iter()
            .filter_map(|k| Some((millis_to_seconds(k.time_ms), k.translation?)))
            .unzip();
        if values.is_empty() {
            return None;
        }
        Some(make_track(
            node,
            TargetPath::Translation,
            TrackData::Vector3(KeyframeTrack::new(times, values, self.interpolation)),
        ))
    }
}

fn make_track(node: &TargetNode, target: TargetPath, data: TrackData) -> Track {
    Track {
        name: node_track_name(&node.path, target),
        meta: TrackMeta {
            node_name: node.path.clone(),
            target,
        },
        data,
    }
}

#[inline]
fn millis_to_seconds(ms: u64) -> f32 {
    ms as f32 / 1000.0
}

/// [`ClipAssembler::assemble`] with the default name and linear interpolation.
pub fn assemble(
    keyframes: &BoneKeyframes,
    bone_order: &[CanonicalBone],
    target_nodes: &[Option<TargetNode>],
) -> Result<AnimationClip> {
    ClipAssembler::default().assemble(keyframes, bone_order, target_nodes)
}

#[cfg(test)]
mod tests {
    use retarget_core::HumanoidRig;

    use super::*;

    fn keys(times: &[u64], translated: bool) -> Vec<Keyframe> {
        times
            .iter()
            .map(|&time_ms| Keyframe {
                time_ms,
                rotation: Quat::IDENTITY,
                translation: translated.then_some(Vec3::ONE),
            })
            .collect()
    }

    #[test]
    fn test_length_mismatch_is_an_error() {
        let err = assemble(&BoneKeyframes::new(), &[CanonicalBone::Hips], &[]).unwrap_err();
        assert!(matches!(err, RetargetError::RigMismatch { bones: 1, nodes: 0 }));
    }

    #[test]
    fn test_tracks_use_node_paths() {
        let mut frames = BoneKeyframes::new();
        frames.insert(CanonicalBone::Hips, keys(&[0, 500], true));
        frames.insert(CanonicalBone::Head, keys(&[0, 250, 1000], false));

        let rig = HumanoidRig::from_bone_names([(CanonicalBone::Hips, "J_Hips"), (CanonicalBone::Head, "J_Head")]);
        let order = CanonicalBone::ALL;
        let clip = assemble(&frames, &order, &rig.target_nodes(&order)).unwrap();

        let names: Vec<_> = clip.tracks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["J_Head.rotation", "J_Hips.position", "J_Hips.rotation"]);
        assert!((clip.duration - 1.0).abs() < f32::EPSILON);
        assert_eq!(clip.bones().collect::<Vec<_>>(), vec![CanonicalBone::Head, CanonicalBone::Hips]);
    }

    #[test]
    fn test_duplicate_bone_in_order_kept_once() {
        let mut frames = BoneKeyframes::new();
        frames.insert(CanonicalBone::Neck, keys(&[0], false));
        let rig = HumanoidRig::from_bone_names([(CanonicalBone::Neck, "Neck")]);
        let order = [CanonicalBone::Neck, CanonicalBone::Neck];
        let clip = assemble(&frames, &order, &rig.target_nodes(&order)).unwrap();
        assert_eq!(clip.channels.len(), 1);
        assert_eq!(clip.tracks.len(), 1);
    }

    #[test]
    fn test_custom_name_and_interpolation() {
        let mut frames = BoneKeyframes::new();
        frames.insert(CanonicalBone::Spine, keys(&[0, 16], false));
        let rig = HumanoidRig::from_bone_names([(CanonicalBone::Spine, "Spine")]);
        let order = [CanonicalBone::Spine];

        let clip = ClipAssembler::new("walk", InterpolationMode::Step)
            .assemble(&frames, &order, &rig.target_nodes(&order))
            .unwrap();

        assert_eq!(clip.name, "walk");
        match &clip.tracks[0].data {
            TrackData::Quaternion(track) => {
                assert_eq!(track.interpolation, InterpolationMode::Step);
                assert!((track.times[1] - 0.016).abs() < 1e-6);
            }
            TrackData::Vector3(_) => panic!("expected a rotation track"),
        }
    }
}
