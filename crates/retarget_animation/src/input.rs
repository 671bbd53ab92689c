//! Raw Track Input
//!
//! Flat, already-parsed animation tracks as produced by a BVH or glTF loader:
//! a name such as `"r_up_arm.quaternion"`, sample times in seconds and a flat
//! array of sample components.

use glam::{Quat, Vec3};
use retarget_core::{Result, RetargetError};
use serde::{Deserialize, Serialize};

/// Property a raw track animates, derived from its name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackProperty {
    Position,
    Quaternion,
    Scale,
    /// Any other suffix; passed through validation on component count alone.
    Other,
}

impl TrackProperty {
    /// Classifies a track name by its `.position` / `.quaternion` / `.scale` suffix.
    #[must_use]
    pub fn of(name: &str) -> Self {
        let Some((_, suffix)) = name.rsplit_once('.') else {
            return Self::Other;
        };
        if suffix.eq_ignore_ascii_case("position") {
            Self::Position
        } else if suffix.eq_ignore_ascii_case("quaternion") {
            Self::Quaternion
        } else if suffix.eq_ignore_ascii_case("scale") {
            Self::Scale
        } else {
            Self::Other
        }
    }

    /// Components per sample this property requires, if it is fixed.
    #[must_use]
    pub fn components(self) -> Option<usize> {
        match self {
            Self::Position | Self::Scale => Some(3),
            Self::Quaternion => Some(4),
            Self::Other => None,
        }
    }
}

/// An immutable, already-parsed source track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTrack {
    pub name: String,
    /// Sample times in seconds, non-decreasing.
    pub times: Vec<f32>,
    /// `times.len() * components` flat sample components.
    pub values: Vec<f32>,
    /// 3 for translation/scale, 4 for rotation quaternions.
    pub components: usize,
}

impl RawTrack {
    #[must_use]
    pub fn new(name: impl Into<String>, times: Vec<f32>, values: Vec<f32>, components: usize) -> Self {
        Self {
            name: name.into(),
            times,
            values,
            components,
        }
    }

    /// A 3-component track, e.g. `"root.position"`.
    #[must_use]
    pub fn vector3(name: impl Into<String>, times: Vec<f32>, values: Vec<f32>) -> Self {
        Self::new(name, times, values, 3)
    }

    /// A 4-component `(x, y, z, w)` track, e.g. `"root.quaternion"`.
    #[must_use]
    pub fn quaternion(name: impl Into<String>, times: Vec<f32>, values: Vec<f32>) -> Self {
        Self::new(name, times, values, 4)
    }

    #[inline]
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.times.len()
    }

    #[inline]
    #[must_use]
    pub fn property(&self) -> TrackProperty {
        TrackProperty::of(&self.name)
    }

    /// Sample `index` as a quaternion. `None` out of range or for 3-component tracks.
    #[must_use]
    pub fn quat_at(&self, index: usize) -> Option<Quat> {
        if self.components != 4 {
            return None;
        }
        let v = self.values.get(index * 4..index * 4 + 4)?;
        Some(Quat::from_xyzw(v[0], v[1], v[2], v[3]))
    }

    /// Sample `index` as a vector. `None` out of range or for 4-component tracks.
    #[must_use]
    pub fn vec3_at(&self, index: usize) -> Option<Vec3> {
        if self.components != 3 {
            return None;
        }
        let v = self.values.get(index * 3..index * 3 + 3)?;
        Some(Vec3::new(v[0], v[1], v[2]))
    }

    /// Rejects tracks whose layout would produce corrupt keyframes.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(RetargetError::invalid_track("<unnamed>", "track name is empty"));
        }

        if !matches!(self.components, 3 | 4) {
            return Err(RetargetError::invalid_track(
                &self.name,
                format!("{} components per sample, expected 3 or 4", self.components),
            ));
        }

        if let Some(required) = self.property().components()
            && required != self.components
        {
            return Err(RetargetError::invalid_track(
                &self.name,
                format!(
                    "{} components per sample, but the property requires {required}",
                    self.components
                ),
            ));
        }

        let expected = self.times.len() * self.components;
        if self.values.len() != expected {
            return Err(RetargetError::invalid_track(
                &self.name,
                format!(
                    "{} values for {} samples of {} components (expected {expected})",
                    self.values.len(),
                    self.times.len(),
                    self.components
                ),
            ));
        }

        let mut previous = 0.0_f32;
        for (i, &t) in self.times.iter().enumerate() {
            if !t.is_finite() || t < 0.0 {
                return Err(RetargetError::invalid_track(
                    &self.name,
                    format!("sample {i} has invalid time {t}"),
                ));
            }
            if t < previous {
                return Err(RetargetError::invalid_track(
                    &self.name,
                    format!("sample times decrease at index {i} ({previous} -> {t})"),
                ));
            }
            previous = t;
        }

        Ok(())
    }
}

/// Validates every track of an input set, stopping at the first malformed one.
pub fn validate_tracks(tracks: &[RawTrack]) -> Result<()> {
    tracks.iter().try_for_each(RawTrack::validate)
}
