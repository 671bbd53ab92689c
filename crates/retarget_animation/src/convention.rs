//! Coordinate Convention Transformer
//!
//! Per-[`SpecVersion`] axis and rotation-sign correction of raw samples.
//!
//! | Version   | Rotation `(x, y, z, w)` | Translation `(x, y, z)`            |
//! |-----------|-------------------------|------------------------------------|
//! | `Legacy`  | `(-x, y, -z, w)`        | `(-x, y, -z) * translation_scale`  |
//! | `Current` | unchanged               | `(x, y, z) * translation_scale`    |
//!
//! Translation is only ever emitted for the root bone ([`CanonicalBone::is_root`]).
//! Corrections are applied exactly once per sample; there is no inverse step,
//! and re-applying the legacy rule to corrected output undoes the mirroring.

use std::fmt;
use std::str::FromStr;

use glam::{Quat, Vec3};
use retarget_core::{CanonicalBone, RetargetError};
use serde::{Deserialize, Serialize};

/// Unit conversion from source translation units to rig units.
pub const TRANSLATION_SCALE: f32 = 0.008;

/// Coordinate / rotation-sign convention of a source asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SpecVersion {
    /// Mirrored forward axis: x and z are negated.
    Legacy,
    /// Source axes already match the rig.
    #[default]
    Current,
}

impl SpecVersion {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Current => "current",
        }
    }

    /// Applies this version's rotation-sign rule.
    #[inline]
    #[must_use]
    pub fn correct_rotation(self, q: Quat) -> Quat {
        match self {
            Self::Legacy => Quat::from_xyzw(-q.x, q.y, -q.z, q.w),
            Self::Current => q,
        }
    }

    /// Applies this version's axis-sign rule and the unit scale.
    #[inline]
    #[must_use]
    pub fn correct_translation(self, v: Vec3, scale: f32) -> Vec3 {
        match self {
            Self::Legacy => Vec3::new(-v.x * scale, v.y * scale, -v.z * scale),
            Self::Current => v * scale,
        }
    }
}

impl fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpecVersion {
    type Err = RetargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Legacy, Self::Current]
            .into_iter()
            .find(|version| version.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| RetargetError::UnknownSpecVersion(s.to_string()))
    }
}

/// A configured transformer: a version plus the translation unit scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTransform {
    pub version: SpecVersion,
    pub translation_scale: f32,
}

impl CoordinateTransform {
    #[must_use]
    pub fn new(version: SpecVersion) -> Self {
        Self {
            version,
            translation_scale: TRANSLATION_SCALE,
        }
    }

    #[must_use]
    pub fn with_translation_scale(mut self, scale: f32) -> Self {
        self.translation_scale = scale;
        self
    }

    /// Corrects one raw sample of `bone`.
    ///
    /// The returned translation is `None` for every non-root bone, and for the
    /// root bone when the source sample had none. Absent is not zero.
    #[must_use]
    pub fn apply(
        &self,
        bone: CanonicalBone,
        raw_rotation: Quat,
        raw_translation: Option<Vec3>,
    ) -> (Quat, Option<Vec3>) {
        let rotation = self.version.correct_rotation(raw_rotation);
        let translation = if bone.is_root() {
            raw_translation.map(|v| self.version.correct_translation(v, self.translation_scale))
        } else {
            None
        };
        (rotation, translation)
    }

    /// Corrected rotation of a bone split across two source joints.
    ///
    /// The product `primary * secondary` gets this version's rotation rule, so
    /// under [`SpecVersion::Current`] it is returned unmirrored.
    #[inline]
    #[must_use]
    pub fn compose_split(&self, primary: Quat, secondary: Quat) -> Quat {
        self.version.correct_rotation(primary * secondary)
    }
}

impl Default for CoordinateTransform {
    fn default() -> Self {
        Self::new(SpecVersion::default())
    }
}

/// [`CoordinateTransform::apply`] with the default unit scale.
#[must_use]
pub fn transform(
    version: SpecVersion,
    bone: CanonicalBone,
    raw_rotation: Quat,
    raw_translation: Option<Vec3>,
) -> (Quat, Option<Vec3>) {
    CoordinateTransform::new(version).apply(bone, raw_rotation, raw_translation)
}
