//! Track naming.
//!
//! Synthesis names bone tracks `".bones[{bone}].{property}"`, the way a
//! hierarchy-based clip parser addresses its bone list. The consumer addresses
//! nodes as `"{nodePath}.rotation"` / `"{nodePath}.position"`. The assembler
//! moves from one to the other with a fixed-pattern rename.

use retarget_core::CanonicalBone;

/// Defines the target property for animation data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetPath {
    Translation, // Maps to node position
    Rotation,    // Maps to node rotation (quaternion)
}

impl TargetPath {
    /// Property suffix in the synthesis naming convention.
    #[must_use]
    pub fn synthesis_suffix(self) -> &'static str {
        match self {
            Self::Translation => "position",
            Self::Rotation => "quaternion",
        }
    }

    /// Property suffix in the consumer's node-path convention.
    #[must_use]
    pub fn node_suffix(self) -> &'static str {
        match self {
            Self::Translation => "position",
            Self::Rotation => "rotation",
        }
    }

    fn from_synthesis_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "position" => Some(Self::Translation),
            "quaternion" => Some(Self::Rotation),
            _ => None,
        }
    }
}

/// `".bones[{bone}].{property}"`.
#[must_use]
pub fn bone_track_name(bone: CanonicalBone, target: TargetPath) -> String {
    format!(".bones[{}].{}", bone.name(), target.synthesis_suffix())
}

/// Splits `".bones[{name}].{property}"` into `(name, target)`.
#[must_use]
pub fn parse_bone_track_name(name: &str) -> Option<(&str, TargetPath)> {
    let rest = name.strip_prefix(".bones[")?;
    let (bone, rest) = rest.split_once(']')?;
    let suffix = rest.strip_prefix('.')?;
    if bone.is_empty() {
        return None;
    }
    Some((bone, TargetPath::from_synthesis_suffix(suffix)?))
}

/// Rewrites a synthesis track name into `"{node_path}.{rotation|position}"`.
///
/// Returns `None` when `name` does not follow the synthesis pattern.
#[must_use]
pub fn rename_bone_track(name: &str, node_path: &str) -> Option<String> {
    let (_, target) = parse_bone_track_name(name)?;
    Some(node_track_name(node_path, target))
}

/// Output track name of `target` on the node at `node_path`.
#[must_use]
pub fn node_track_name(node_path: &str, target: TargetPath) -> String {
    format!("{node_path}.{}", target.node_suffix())
}
