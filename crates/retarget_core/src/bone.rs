//! Canonical Humanoid Bones
//!
//! The engine retargets onto a fixed set of 19 humanoid joints. Their order is
//! significant: it is the hierarchy order of synthesized keyframes and must
//! match the order of the target node list supplied by the consumer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::RetargetError;

/// One of the 19 humanoid joints the engine targets.
///
/// The derived `Ord` follows declaration order, which is the canonical
/// hierarchy order ([`CanonicalBone::ALL`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CanonicalBone {
    Head,
    Neck,
    Chest,
    Spine,
    Hips,
    RightShoulder,
    RightUpperArm,
    RightLowerArm,
    RightHand,
    LeftShoulder,
    LeftUpperArm,
    LeftLowerArm,
    LeftHand,
    RightUpperLeg,
    RightLowerLeg,
    RightFoot,
    LeftUpperLeg,
    LeftLowerLeg,
    LeftFoot,
}

impl CanonicalBone {
    /// Number of canonical bones.
    pub const COUNT: usize = 19;

    /// All canonical bones in hierarchy order.
    pub const ALL: [CanonicalBone; Self::COUNT] = [
        Self::Head,
        Self::Neck,
        Self::Chest,
        Self::Spine,
        Self::Hips,
        Self::RightShoulder,
        Self::RightUpperArm,
        Self::RightLowerArm,
        Self::RightHand,
        Self::LeftShoulder,
        Self::LeftUpperArm,
        Self::LeftLowerArm,
        Self::LeftHand,
        Self::RightUpperLeg,
        Self::RightLowerLeg,
        Self::RightFoot,
        Self::LeftUpperLeg,
        Self::LeftLowerLeg,
        Self::LeftFoot,
    ];

    /// Position of this bone in [`CanonicalBone::ALL`].
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The humanoid bone name, e.g. `"rightUpperArm"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Neck => "neck",
            Self::Chest => "chest",
            Self::Spine => "spine",
            Self::Hips => "hips",
            Self::RightShoulder => "rightShoulder",
            Self::RightUpperArm => "rightUpperArm",
            Self::RightLowerArm => "rightLowerArm",
            Self::RightHand => "rightHand",
            Self::LeftShoulder => "leftShoulder",
            Self::LeftUpperArm => "leftUpperArm",
            Self::LeftLowerArm => "leftLowerArm",
            Self::LeftHand => "leftHand",
            Self::RightUpperLeg => "rightUpperLeg",
            Self::RightLowerLeg => "rightLowerLeg",
            Self::RightFoot => "rightFoot",
            Self::LeftUpperLeg => "leftUpperLeg",
            Self::LeftLowerLeg => "leftLowerLeg",
            Self::LeftFoot => "leftFoot",
        }
    }

    /// Only the root of the humanoid carries translation.
    #[inline]
    #[must_use]
    pub fn is_root(self) -> bool {
        matches!(self, Self::Hips)
    }
}

impl fmt::Display for CanonicalBone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CanonicalBone {
    type Err = RetargetError;

    /// Case-insensitive lookup by humanoid bone name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|bone| bone.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| RetargetError::UnknownBone(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_declaration_order() {
        for (i, bone) in CanonicalBone::ALL.iter().enumerate() {
            assert_eq!(bone.index(), i);
        }
        assert_eq!(CanonicalBone::ALL[4], CanonicalBone::Hips);
    }

    #[test]
    fn test_only_hips_is_root() {
        let roots: Vec<_> = CanonicalBone::ALL.iter().filter(|b| b.is_root()).collect();
        assert_eq!(roots, vec![&CanonicalBone::Hips]);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("leftUpperLeg".parse::<CanonicalBone>().unwrap(), CanonicalBone::LeftUpperLeg);
        assert_eq!("HIPS".parse::<CanonicalBone>().unwrap(), CanonicalBone::Hips);
        assert!(matches!(
            "tail".parse::<CanonicalBone>(),
            Err(RetargetError::UnknownBone(name)) if name == "tail"
        ));
    }

    #[test]
    fn test_serde_uses_humanoid_names() {
        let json = serde_json::to_string(&CanonicalBone::RightLowerArm).unwrap();
        assert_eq!(json, "\"rightLowerArm\"");
        let back: CanonicalBone = serde_json::from_str("\"leftFoot\"").unwrap();
        assert_eq!(back, CanonicalBone::LeftFoot);
    }
}
