//! Output Keyframe Tracks
//!
//! Per-node keyframe storage of the assembled clip.

use serde::{Deserialize, Serialize};

/// How a consumer should interpolate between neighbouring keyframes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationMode {
    #[default]
    Linear,
    Step,
}

/// Playback-ready keyframes of one property of one node.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeTrack<T> {
    /// Keyframe times in seconds, non-decreasing.
    pub times: Vec<f32>,
    pub values: Vec<T>,
    pub interpolation: InterpolationMode,
}

impl<T> KeyframeTrack<T> {
    #[must_use]
    pub fn new(times: Vec<f32>, values: Vec<T>, interpolation: InterpolationMode) -> Self {
        debug_assert_eq!(times.len(), values.len(), "one value per keyframe time");
        Self {
            times,
            values,
            interpolation,
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Time of the last keyframe, or zero for an empty track.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.times.last().copied().unwrap_or(0.0)
    }

    /// `(time, value)` of keyframe `index`.
    #[must_use]
    pub fn keyframe(&self, index: usize) -> Option<(f32, &T)> {
        Some((*self.times.get(index)?, self.values.get(index)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_is_last_time() {
        let track = KeyframeTrack::new(vec![0.0, 0.5, 1.25], vec![1, 2, 3], InterpolationMode::Linear);
        assert_eq!(track.len(), 3);
        assert!((track.duration() - 1.25).abs() < f32::EPSILON);
        assert_eq!(track.keyframe(1), Some((0.5, &2)));
        assert_eq!(track.keyframe(3), None);
    }

    #[test]
    fn test_empty_track() {
        let track: KeyframeTrack<f32> = KeyframeTrack::new(vec![], vec![], InterpolationMode::Step);
        assert!(track.is_empty());
        assert!(track.duration().abs() < f32::EPSILON);
    }
}
