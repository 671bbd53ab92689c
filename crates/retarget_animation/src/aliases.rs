//! Bone Alias Registry
//!
//! Static tables mapping each [`CanonicalBone`] to the joint names used for it
//! by every supported [`SourceFormat`]. Lookups are pure and total; nothing
//! here allocates except [`FormatSelection::candidates`], which builds a small
//! inline list.
//!
//! Naming references:
//! - mocopi BVH: <https://www.sony.net/Products/mocopi-dev/jp/documents/Home/TechSpec.html>
//! - Unity humanoid / VRM: <https://wiki.virtualcast.jp/wiki/unity/humanoid>
//! - MotionBuilder skeleton: <https://help.autodesk.com/view/MOBPRO/2023/JPN/?guid=GUID-6FD84BDA-2936-4142-B547-B2205EA0306E>

use std::fmt;
use std::str::FromStr;

use retarget_core::{CanonicalBone, RetargetError};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Naming convention of the asset the tracks were parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// Sony mocopi BVH (`root`, `torso_3`, `r_up_arm`, ...).
    Mocopi,
    /// Generic lower-case humanoid rig (`hips`, `rightarm`, `leftupleg`, ...).
    Generic,
    /// VRM humanoid bone names, optionally with the normalized-rig prefix.
    Vrm,
    /// DCC-tool rig with side suffixes (`arm_r`, `upleg_l`, ...).
    Dcc,
    /// Poser / DAZ BVH (`hip`, `abdomen`, `rShldr`, `lButtock`, ...).
    Poser,
    /// VRoid Studio avatar joints (`J_Bip_C_Hips`, `J_Bip_L_UpperArm`, ...).
    Vroid,
}

impl SourceFormat {
    /// Number of supported formats.
    pub const COUNT: usize = 6;

    /// Priority order used when probing across formats.
    pub const PROBE_ORDER: [SourceFormat; Self::COUNT] = [
        Self::Mocopi,
        Self::Generic,
        Self::Vrm,
        Self::Dcc,
        Self::Poser,
        Self::Vroid,
    ];

    /// Column of this format in the alias table.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Mocopi => "mocopi",
            Self::Generic => "generic",
            Self::Vrm => "vrm",
            Self::Dcc => "dcc",
            Self::Poser => "poser",
            Self::Vroid => "vroid",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SourceFormat {
    type Err = RetargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::PROBE_ORDER
            .iter()
            .copied()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| RetargetError::UnknownFormat(s.to_string()))
    }
}

type AliasRow = (CanonicalBone, [&'static [&'static str]; SourceFormat::COUNT]);

// Columns follow `SourceFormat` declaration order:
//   mocopi, generic, vrm, dcc, poser, vroid
#[rustfmt::skip]
static ALIASES: [AliasRow; CanonicalBone::COUNT] = [
    (CanonicalBone::Head,          [&["head"],       &["head"],          &["head", "Normalized_head"],                   &["head"],       &["head"],                 &["J_Bip_C_Head"]]),
    (CanonicalBone::Neck,          [&["neck_1"],     &["neck"],          &["neck", "Normalized_neck"],                   &["neck"],       &["neck"],                 &["J_Bip_C_Neck"]]),
    (CanonicalBone::Chest,         [&["torso_6"],    &["spine1"],        &["chest", "Normalized_chest"],                 &["spine1"],     &["chest"],                &["J_Bip_C_Chest"]]),
    (CanonicalBone::Spine,         [&["torso_3"],    &["spine3"],        &["spine", "Normalized_spine"],                 &["spine2"],     &["abdomen"],              &["J_Bip_C_Spine"]]),
    (CanonicalBone::Hips,          [&["root"],       &["hips"],          &["hips", "Normalized_hips"],                   &["hips"],       &["hip"],                  &["J_Bip_C_Hips"]]),
    (CanonicalBone::RightShoulder, [&["r_shoulder"], &["rightshoulder"], &["rightshoulder", "Normalized_rightShoulder"], &["shoulder_r"], &["rCollar"],              &["J_Bip_R_Shoulder"]]),
    (CanonicalBone::RightUpperArm, [&["r_up_arm"],   &["rightarm"],      &["rightupperarm", "Normalized_rightUpperArm"], &["arm_r"],      &["rShldr"],               &["J_Bip_R_UpperArm"]]),
    (CanonicalBone::RightLowerArm, [&["r_low_arm"],  &["rightforearm"],  &["rightlowerarm", "Normalized_rightLowerArm"], &["forearm_r"],  &["rForeArm"],             &["J_Bip_R_LowerArm"]]),
    (CanonicalBone::RightHand,     [&["r_hand"],     &["righthand"],     &["righthand", "Normalized_rightHand"],         &["hand_r"],     &["rHand"],                &["J_Bip_R_Hand"]]),
    (CanonicalBone::LeftShoulder,  [&["l_shoulder"], &["leftshoulder"],  &["leftshoulder", "Normalized_leftShoulder"],   &["shoulder_l"], &["lCollar"],              &["J_Bip_L_Shoulder"]]),
    (CanonicalBone::LeftUpperArm,  [&["l_up_arm"],   &["leftarm"],       &["leftupperarm", "Normalized_leftUpperArm"],   &["arm_l"],      &["lShldr"],               &["J_Bip_L_UpperArm"]]),
    (CanonicalBone::LeftLowerArm,  [&["l_low_arm"],  &["leftforearm"],   &["leftlowerarm", "Normalized_leftLowerArm"],   &["forearm_l"],  &["lForeArm"],             &["J_Bip_L_LowerArm"]]),
    (CanonicalBone::LeftHand,      [&["l_hand"],     &["lefthand"],      &["lefthand", "Normalized_leftHand"],           &["hand_l"],     &["lHand"],                &["J_Bip_L_Hand"]]),
    (CanonicalBone::RightUpperLeg, [&["r_up_leg"],   &["rightupleg"],    &["rightupperleg", "Normalized_rightUpperLeg"], &["upleg_r"],    &["rButtock", "rThigh"],   &["J_Bip_R_UpperLeg"]]),
    (CanonicalBone::RightLowerLeg, [&["r_low_leg"],  &["rightleg"],      &["rightlowerleg", "Normalized_rightLowerLeg"], &["leg_r"],      &["rShin"],                &["J_Bip_R_LowerLeg"]]),
    (CanonicalBone::RightFoot,     [&["r_foot"],     &["rightfoot"],     &["rightfoot", "Normalized_rightFoot"],         &["foot_r"],     &["rFoot"],                &["J_Bip_R_Foot"]]),
    (CanonicalBone::LeftUpperLeg,  [&["l_up_leg"],   &["leftupleg"],     &["leftupperleg", "Normalized_leftUpperLeg"],   &["upleg_l"],    &["lButtock", "lThigh"],   &["J_Bip_L_UpperLeg"]]),
    (CanonicalBone::LeftLowerLeg,  [&["l_low_leg"],  &["leftleg"],       &["leftlowerleg", "Normalized_leftLowerLeg"],   &["leg_l"],      &["lShin"],                &["J_Bip_L_LowerLeg"]]),
    (CanonicalBone::LeftFoot,      [&["l_foot"],     &["leftfoot"],      &["leftfoot", "Normalized_leftFoot"],           &["foot_l"],     &["lFoot"],                &["J_Bip_L_Foot"]]),
];

/// A canonical bone that a source rig splits across two joints.
///
/// The retargeted rotation is `primary * secondary` at each sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitJoint {
    pub primary: &'static str,
    pub secondary: &'static str,
}

static SPLIT_JOINTS: [(SourceFormat, CanonicalBone, SplitJoint); 2] = [
    (
        SourceFormat::Poser,
        CanonicalBone::RightUpperLeg,
        SplitJoint { primary: "rButtock", secondary: "rThigh" },
    ),
    (
        SourceFormat::Poser,
        CanonicalBone::LeftUpperLeg,
        SplitJoint { primary: "lButtock", secondary: "lThigh" },
    ),
];

/// Ordered alias candidates for `bone` in `format`.
#[inline]
#[must_use]
pub fn aliases_for(bone: CanonicalBone, format: SourceFormat) -> &'static [&'static str] {
    ALIASES[bone.index()].1[format.index()]
}

/// String-keyed variant of [`aliases_for`]; unknown names yield an empty list.
#[must_use]
pub fn aliases_by_name(bone: &str, format: &str) -> &'static [&'static str] {
    match (bone.parse::<CanonicalBone>(), format.parse::<SourceFormat>()) {
        (Ok(bone), Ok(format)) => aliases_for(bone, format),
        _ => &[],
    }
}

/// The split-joint definition for `bone` in `format`, if that rig splits it.
#[must_use]
pub fn split_joint(bone: CanonicalBone, format: SourceFormat) -> Option<SplitJoint> {
    SPLIT_JOINTS
        .iter()
        .find(|(f, b, _)| *f == format && *b == bone)
        .map(|(_, _, split)| *split)
}

/// The split-joint definition whose primary joint is `alias`, for any format.
#[must_use]
pub fn split_joint_for_alias(bone: CanonicalBone, alias: &str) -> Option<SplitJoint> {
    SPLIT_JOINTS
        .iter()
        .find(|(_, b, split)| *b == bone && split.primary.eq_ignore_ascii_case(alias))
        .map(|(_, _, split)| *split)
}

/// Inline candidate list; probing all formats rarely exceeds this.
pub type Candidates = SmallVec<[&'static str; 8]>;

/// How alias candidates are chosen for each bone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FormatSelection {
    /// Use the aliases of one known format.
    Fixed(SourceFormat),
    /// Concatenate the aliases of every format in [`SourceFormat::PROBE_ORDER`].
    #[default]
    Probe,
}

impl FormatSelection {
    /// Candidate names for `bone`, in resolution order.
    ///
    /// When probing, a name already contributed by a higher-priority format
    /// (compared case-insensitively) is not repeated.
    #[must_use]
    pub fn candidates(self, bone: CanonicalBone) -> Candidates {
        match self {
            Self::Fixed(format) => aliases_for(bone, format).iter().copied().collect(),
            Self::Probe => {
                let mut out = Candidates::new();
                for format in SourceFormat::PROBE_ORDER {
                    for &alias in aliases_for(bone, format) {
                        if !out.iter().any(|seen: &&str| seen.eq_ignore_ascii_case(alias)) {
                            out.push(alias);
                        }
                    }
                }
                out
            }
        }
    }
}

impl From<SourceFormat> for FormatSelection {
    fn from(format: SourceFormat) -> Self {
        Self::Fixed(format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_rows_follow_canonical_order() {
        for (i, (bone, _)) in ALIASES.iter().enumerate() {
            assert_eq!(bone.index(), i, "row {i} is {bone}");
        }
    }

    #[test]
    fn test_every_pair_has_aliases() {
        for bone in CanonicalBone::ALL {
            for format in SourceFormat::PROBE_ORDER {
                assert!(!aliases_for(bone, format).is_empty(), "{bone} / {format}");
            }
        }
    }

    #[test]
    fn test_unknown_names_yield_empty() {
        assert!(aliases_by_name("tail", "mocopi").is_empty());
        assert!(aliases_by_name("hips", "fbx").is_empty());
        assert_eq!(aliases_by_name("hips", "MOCOPI"), &["root"]);
    }

    #[test]
    fn test_probe_is_deduplicated_and_ordered() {
        let candidates = FormatSelection::Probe.candidates(CanonicalBone::Head);
        assert_eq!(candidates.as_slice(), &["head", "Normalized_head", "J_Bip_C_Head"]);

        let hips = FormatSelection::Probe.candidates(CanonicalBone::Hips);
        assert_eq!(hips[0], "root");
        assert_eq!(hips[1], "hips");
    }

    #[test]
    fn test_split_joints_only_for_poser_upper_legs() {
        let split = split_joint(CanonicalBone::LeftUpperLeg, SourceFormat::Poser).unwrap();
        assert_eq!(split.primary, "lButtock");
        assert_eq!(split.secondary, "lThigh");

        assert!(split_joint(CanonicalBone::LeftUpperLeg, SourceFormat::Mocopi).is_none());
        assert!(split_joint(CanonicalBone::Hips, SourceFormat::Poser).is_none());

        assert_eq!(
            split_joint_for_alias(CanonicalBone::RightUpperLeg, "RBUTTOCK").map(|s| s.secondary),
            Some("rThigh")
        );
        assert!(split_joint_for_alias(CanonicalBone::RightUpperLeg, "rThigh").is_none());
    }

    #[test]
    fn test_format_names_round_trip() {
        for format in SourceFormat::PROBE_ORDER {
            assert_eq!(format.name().parse::<SourceFormat>().unwrap(), format);
        }
        assert!("fbx".parse::<SourceFormat>().is_err());
    }
}
