//! Target Rig Descriptor
//!
//! The consumer's humanoid rig: a set of named scene nodes plus a map from
//! [`CanonicalBone`] to the node that plays that role (the equivalent of a VRM
//! humanoid's `humanBones`). Rigs may lack optional bones; such bones are
//! simply absent from the map.

use slotmap::{SlotMap, new_key_type};

use crate::bone::CanonicalBone;

new_key_type! {
    /// Opaque handle to a node of a [`HumanoidRig`].
    pub struct NodeHandle;
}

/// A scene node of the target rig.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RigNode {
    /// Node path used to address the node in output track names.
    pub name: String,
}

/// A resolved target slot: the node handle and the path tracks should address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetNode {
    pub handle: NodeHandle,
    pub path: String,
}

/// Humanoid rig descriptor handed to the engine by the consumer.
#[derive(Debug, Clone)]
pub struct HumanoidRig {
    nodes: SlotMap<NodeHandle, RigNode>,
    human_bones: [Option<NodeHandle>; CanonicalBone::COUNT],
}

impl Default for HumanoidRig {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanoidRig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            human_bones: [None; CanonicalBone::COUNT],
        }
    }

    /// Builds a rig from `(bone, node path)` pairs, one node per pair.
    pub fn from_bone_names<I, S>(bones: I) -> Self
    where
        I: IntoIterator<Item = (CanonicalBone, S)>,
        S: Into<String>,
    {
        let mut rig = Self::new();
        for (bone, name) in bones {
            rig.add_bone(bone, name);
        }
        rig
    }

    /// Adds a node that is not (yet) assigned to a humanoid bone.
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeHandle {
        self.nodes.insert(RigNode { name: name.into() })
    }

    /// Adds a node and assigns it to `bone`, replacing any previous assignment.
    pub fn add_bone(&mut self, bone: CanonicalBone, name: impl Into<String>) -> NodeHandle {
        let handle = self.add_node(name);
        self.assign(bone, handle);
        handle
    }

    /// Assigns an existing node to `bone`. Unknown handles are ignored.
    pub fn assign(&mut self, bone: CanonicalBone, handle: NodeHandle) {
        if self.nodes.contains_key(handle) {
            self.human_bones[bone.index()] = Some(handle);
        } else {
            log::error!("Attempted to assign an invalid NodeHandle to bone '{bone}'.");
        }
    }

    /// Removes the node assignment of `bone`; the node itself stays in the rig.
    pub fn unassign(&mut self, bone: CanonicalBone) {
        self.human_bones[bone.index()] = None;
    }

    #[must_use]
    pub fn bone_node(&self, bone: CanonicalBone) -> Option<NodeHandle> {
        self.human_bones[bone.index()]
    }

    #[must_use]
    pub fn node(&self, handle: NodeHandle) -> Option<&RigNode> {
        self.nodes.get(handle)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The target slot for `bone`, if the rig has a node for it.
    #[must_use]
    pub fn target_node(&self, bone: CanonicalBone) -> Option<TargetNode> {
        let handle = self.bone_node(bone)?;
        let node = self.nodes.get(handle)?;
        Some(TargetNode {
            handle,
            path: node.name.clone(),
        })
    }

    /// Target slots ordered exactly like `bone_order`.
    #[must_use]
    pub fn target_nodes(&self, bone_order: &[CanonicalBone]) -> Vec<Option<TargetNode>> {
        bone_order.iter().map(|&bone| self.target_node(bone)).collect()
    }
}
