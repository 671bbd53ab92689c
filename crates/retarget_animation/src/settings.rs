//! Retarget Settings
//!
//! Everything the pipeline needs to know about the source asset and the shape
//! of the output clip.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use retarget::{RetargetSettings, SpecVersion, FormatSelection, SourceFormat};
//!
//! // Default: current convention, probe every alias table
//! let settings = RetargetSettings::default();
//!
//! // A mocopi BVH export in the legacy convention
//! let settings = RetargetSettings {
//!     spec_version: SpecVersion::Legacy,
//!     source: FormatSelection::Fixed(SourceFormat::Mocopi),
//!     ..Default::default()
//! };
//!
//! // Or from JSON
//! let settings = RetargetSettings::from_json(r#"{ "spec_version": "legacy", "source": { "fixed": "mocopi" } }"#)?;
//! ```

use retarget_core::Result;
use serde::{Deserialize, Serialize};

use crate::aliases::FormatSelection;
use crate::assembler::{ClipAssembler, DEFAULT_CLIP_NAME};
use crate::convention::{CoordinateTransform, SpecVersion, TRANSLATION_SCALE};
use crate::synthesis::Synthesizer;
use crate::tracks::InterpolationMode;

/// Pipeline configuration. Missing JSON fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetargetSettings {
    /// Coordinate convention of the source asset.
    pub spec_version: SpecVersion,
    /// Alias table(s) used to find each bone's tracks.
    pub source: FormatSelection,
    /// Source-to-rig unit conversion for root translation.
    pub translation_scale: f32,
    pub clip_name: String,
    pub interpolation: InterpolationMode,
}

impl Default for RetargetSettings {
    fn default() -> Self {
        Self {
            spec_version: SpecVersion::default(),
            source: FormatSelection::default(),
            translation_scale: TRANSLATION_SCALE,
            clip_name: DEFAULT_CLIP_NAME.to_string(),
            interpolation: InterpolationMode::default(),
        }
    }
}

impl RetargetSettings {
    /// Parses settings from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn transform(&self) -> CoordinateTransform {
        CoordinateTransform::new(self.spec_version).with_translation_scale(self.translation_scale)
    }

    #[must_use]
    pub fn synthesizer(&self) -> Synthesizer {
        Synthesizer::new(self.transform(), self.source)
    }

    #[must_use]
    pub fn assembler(&self) -> ClipAssembler {
        ClipAssembler::new(self.clip_name.clone(), self.interpolation)
    }
}
