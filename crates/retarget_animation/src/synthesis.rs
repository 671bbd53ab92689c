//! Keyframe Synthesizer
//!
//! Walks the canonical bones in order, resolves each bone's source tracks and
//! turns every source sample into a corrected, millisecond-stamped
//! [`Keyframe`]. Bones without a resolvable, non-empty track are left out.

use std::collections::BTreeMap;

use glam::{Quat, Vec3};
use retarget_core::{CanonicalBone, Result};

use crate::aliases::{FormatSelection, SourceFormat, split_joint_for_alias};
use crate::convention::{CoordinateTransform, SpecVersion};
use crate::input::{RawTrack, validate_tracks};
use crate::resolver::{ResolvedTracks, TrackIndex, resolve_in};

/// One corrected sample of one bone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    /// Sample time truncated to whole milliseconds.
    pub time_ms: u64,
    pub rotation: Quat,
    /// Only ever present on the root bone.
    pub translation: Option<Vec3>,
}

/// Keyframe sequences per bone; iteration follows canonical order.
pub type BoneKeyframes = BTreeMap<CanonicalBone, Vec<Keyframe>>;

/// Converts a sample time to whole milliseconds, truncating.
///
/// The product is formed in `f64` so that `1.2345_f32` becomes `1234`.
#[inline]
#[must_use]
pub fn seconds_to_millis(seconds: f32) -> u64 {
    (f64::from(seconds) * 1000.0).trunc() as u64
}

/// Builds [`BoneKeyframes`] from raw tracks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Synthesizer {
    pub transform: CoordinateTransform,
    pub source: FormatSelection,
}

impl Synthesizer {
    #[must_use]
    pub fn new(transform: CoordinateTransform, source: FormatSelection) -> Self {
        Self { transform, source }
    }

    /// Validates `tracks`, then synthesizes keyframes for each of `bones`.
    pub fn synthesize(&self, bones: &[CanonicalBone], tracks: &[RawTrack]) -> Result<BoneKeyframes> {
        validate_tracks(tracks)?;

        let index = TrackIndex::new(tracks);
        let mut out = BoneKeyframes::new();

        for &bone in bones {
            if out.contains_key(&bone) {
                continue;
            }
            let candidates = self.source.candidates(bone);
            let Some(resolved) = resolve_in(&candidates, &index) else {
                log::debug!("bone '{bone}': no track for any of {candidates:?}");
                continue;
            };
            match self.bone_keyframes(bone, &resolved, &index) {
                Some(keys) => {
                    log::debug!("bone '{bone}': {} keyframes from '{}'", keys.len(), resolved.alias);
                    out.insert(bone, keys);
                }
                None => log::debug!("bone '{bone}': track '{}' has no samples", resolved.alias),
            }
        }

        Ok(out)
    }

    fn bone_keyframes(
        &self,
        bone: CanonicalBone,
        resolved: &ResolvedTracks<'_>,
        index: &TrackIndex<'_>,
    ) -> Option<Vec<Keyframe>> {
        let base = resolved.rotation.or(resolved.position)?;
        let count = base.sample_count();
        if count == 0 {
            return None;
        }

        if let (Some(rotation), Some(position)) = (resolved.rotation, resolved.position)
            && rotation.sample_count() != position.sample_count()
        {
            log::warn!(
                "bone '{bone}': {} rotation samples but {} position samples; using rotation times",
                rotation.sample_count(),
                position.sample_count()
            );
        }

        let secondary = split_joint_for_alias(bone, resolved.alias).and_then(|split| {
            let track = index.rotation(split.secondary);
            if track.is_none() {
                log::warn!(
                    "bone '{bone}': split joint '{}' has no '{}' partner track",
                    split.primary,
                    split.secondary
                );
            }
            track
        });

        let mut keys = Vec::with_capacity(count);
        for (i, &time) in base.times.iter().enumerate() {
            let primary = resolved
                .rotation
                .and_then(|track| track.quat_at(i))
                .unwrap_or(Quat::IDENTITY);
            let raw_rotation = match secondary.and_then(|track| track.quat_at(i)) {
                Some(partner) => primary * partner,
                None => primary,
            };
            let raw_translation = resolved.position.and_then(|track| track.vec3_at(i));

            let (rotation, translation) = self.transform.apply(bone, raw_rotation, raw_translation);
            keys.push(Keyframe {
                time_ms: seconds_to_millis(time),
                rotation,
                translation,
            });
        }
        Some(keys)
    }
}

/// Synthesizes keyframes for `bones` using the aliases of a single `format`.
pub fn synthesize(
    version: SpecVersion,
    format: SourceFormat,
    bones: &[CanonicalBone],
    tracks: &[RawTrack],
) -> Result<BoneKeyframes> {
    Synthesizer::new(CoordinateTransform::new(version), FormatSelection::Fixed(format))
        .synthesize(bones, tracks)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn quat_close(a: Quat, b: Quat) -> bool {
        (glam::Vec4::from(a) - glam::Vec4::from(b)).abs().max_element() < EPSILON
    }

    #[test]
    fn test_millis_truncate() {
        assert_eq!(seconds_to_millis(1.2345), 1234);
        assert_eq!(seconds_to_millis(0.0), 0);
        assert_eq!(seconds_to_millis(0.0339), 33);
        assert_eq!(seconds_to_millis(2.0), 2000);
    }

    #[test]
    fn test_rotation_times_preferred() {
        let tracks = vec![
            RawTrack::vector3("root.position", vec![0.0, 0.5], vec![0.0; 6]),
            RawTrack::quaternion("root.quaternion", vec![0.0, 0.1, 0.2], vec![0.0, 0.0, 0.0, 1.0].repeat(3)),
        ];
        let keys = synthesize(SpecVersion::Current, SourceFormat::Mocopi, &[CanonicalBone::Hips], &tracks).unwrap();
        let hips = &keys[&CanonicalBone::Hips];

        assert_eq!(hips.iter().map(|k| k.time_ms).collect::<Vec<_>>(), vec![0, 100, 200]);
        assert!(hips[0].translation.is_some());
        assert!(hips[1].translation.is_some());
        // Position track ran out.
        assert!(hips[2].translation.is_none());
    }

    #[test]
    fn test_position_only_root_gets_identity_rotation() {
        let tracks = vec![RawTrack::vector3("hips.position", vec![0.0], vec![10.0, 0.0, 0.0])];
        let keys = synthesize(SpecVersion::Legacy, SourceFormat::Generic, &[CanonicalBone::Hips], &tracks).unwrap();
        let key = keys[&CanonicalBone::Hips][0];

        assert_eq!(key.rotation, SpecVersion::Legacy.correct_rotation(Quat::IDENTITY));
        assert!((key.translation.unwrap().x + 0.08).abs() < EPSILON);
    }

    #[test]
    fn test_empty_track_omits_bone() {
        let tracks = vec![RawTrack::quaternion("neck_1.quaternion", vec![], vec![])];
        let keys = synthesize(SpecVersion::Current, SourceFormat::Mocopi, &[CanonicalBone::Neck], &tracks).unwrap();
        assert!(keys.is_empty());
    }

    #[test]
    fn test_split_joint_composes_rotations() {
        let buttock = Quat::from_rotation_x(0.3);
        let thigh = Quat::from_rotation_z(0.7);
        let tracks = vec![
            RawTrack::quaternion("rButtock.quaternion", vec![0.0], buttock.to_array().to_vec()),
            RawTrack::quaternion("rThigh.quaternion", vec![0.0], thigh.to_array().to_vec()),
        ];
        let keys = synthesize(SpecVersion::Legacy, SourceFormat::Poser, &[CanonicalBone::RightUpperLeg], &tracks)
            .unwrap();

        let product = buttock * thigh;
        let expected = Quat::from_xyzw(-product.x, product.y, -product.z, product.w);
        assert!(quat_close(keys[&CanonicalBone::RightUpperLeg][0].rotation, expected));
    }

    #[test]
    fn test_split_joint_without_partner_uses_primary() {
        let _ = env_logger::builder().is_test(true).try_init();
        let buttock = Quat::from_rotation_x(0.3);
        let tracks = vec![RawTrack::quaternion("lButtock.quaternion", vec![0.0], buttock.to_array().to_vec())];
        let keys = synthesize(SpecVersion::Current, SourceFormat::Poser, &[CanonicalBone::LeftUpperLeg], &tracks)
            .unwrap();
        assert!(quat_close(keys[&CanonicalBone::LeftUpperLeg][0].rotation, buttock));
    }

    #[test]
    fn test_thigh_alone_is_plain_upper_leg() {
        let thigh = Quat::from_rotation_z(0.7);
        let tracks = vec![RawTrack::quaternion("lThigh.quaternion", vec![0.0], thigh.to_array().to_vec())];
        let keys = synthesize(SpecVersion::Current, SourceFormat::Poser, &[CanonicalBone::LeftUpperLeg], &tracks)
            .unwrap();
        assert!(quat_close(keys[&CanonicalBone::LeftUpperLeg][0].rotation, thigh));
    }

    #[test]
    fn test_malformed_input_is_rejected() {
        let tracks = vec![RawTrack::quaternion("root.quaternion", vec![0.2, 0.1], vec![0.0; 8])];
        let err = synthesize(SpecVersion::Current, SourceFormat::Mocopi, &CanonicalBone::ALL, &tracks).unwrap_err();
        assert!(matches!(err, retarget_core::RetargetError::InvalidTrackData { .. }));
    }

    #[test]
    fn test_duplicate_bones_synthesized_once() {
        let tracks = vec![RawTrack::quaternion("head.quaternion", vec![0.0], vec![0.0, 0.0, 0.0, 1.0])];
        let keys = synthesize(
            SpecVersion::Current,
            SourceFormat::Generic,
            &[CanonicalBone::Head, CanonicalBone::Head],
            &tracks,
        )
        .unwrap();
        assert_eq!(keys.len(), 1);
    }
}
