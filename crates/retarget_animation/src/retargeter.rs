//! The full retargeting pipeline: validate, synthesize, pair with the rig,
//! assemble.

use retarget_core::{CanonicalBone, HumanoidRig, Result};

use crate::clip::AnimationClip;
use crate::input::RawTrack;
use crate::settings::RetargetSettings;

/// Stateless pipeline configured by [`RetargetSettings`].
///
/// Holds no per-call state, so one instance can serve any number of
/// concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct Retargeter {
    settings: RetargetSettings,
}

impl Retargeter {
    #[must_use]
    pub fn new(settings: RetargetSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn settings(&self) -> &RetargetSettings {
        &self.settings
    }

    /// Retargets `tracks` onto every canonical bone `rig` provides.
    pub fn retarget(&self, tracks: &[RawTrack], rig: &HumanoidRig) -> Result<AnimationClip> {
        self.retarget_bones(&CanonicalBone::ALL, tracks, rig)
    }

    /// Retargets onto a caller-chosen subset or order of bones.
    pub fn retarget_bones(
        &self,
        bone_order: &[CanonicalBone],
        tracks: &[RawTrack],
        rig: &HumanoidRig,
    ) -> Result<AnimationClip> {
        let keyframes = self.settings.synthesizer().synthesize(bone_order, tracks)?;
        let target_nodes = rig.target_nodes(bone_order);
        let clip = self.settings.assembler().assemble(&keyframes, bone_order, &target_nodes)?;

        log::info!(
            "Retargeted clip '{}': {}/{} bones animated, {} tracks, {:.3}s ({} convention, {:?})",
            clip.name,
            clip.channels.len(),
            bone_order.len(),
            clip.tracks.len(),
            clip.duration,
            self.settings.spec_version,
            self.settings.source,
        );
        Ok(clip)
    }
}
