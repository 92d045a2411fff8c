//! Arena-backed transform hierarchy.
//!
//! Nodes are addressed by [`NodeId`] and only ever appended, so a parent
//! always precedes its children and the tree cannot contain cycles.

use cgmath::{Matrix4, One, Quaternion, Vector3};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct NodeId(usize);

/// Local transform of one node, relative to its parent.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub translation: Vector3<f32>,
    pub rotation: Quaternion<f32>,
    pub scale: Vector3<f32>,
    parent: Option<NodeId>,
}

impl Transform {
    fn identity(parent: Option<NodeId>) -> Self {
        Self {
            translation: Vector3::new(0.0, 0.0, 0.0),
            rotation: Quaternion::one(),
            scale: Vector3::new(1.0, 1.0, 1.0),
            parent,
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// `T * R * S`
    pub fn local_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.translation)
            * Matrix4::from(self.rotation)
            * Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }
}

#[derive(Debug, Default)]
pub struct TransformTree {
    nodes: Vec<Transform>,
}

impl TransformTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an identity node under `parent` (or as a root).
    pub fn insert(&mut self, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Transform::identity(parent));
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Transform> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Transform> {
        self.nodes.get_mut(id.0)
    }

    pub fn translate(&mut self, id: NodeId, delta: Vector3<f32>) {
        if let Some(node) = self.get_mut(id) {
            node.translation += delta;
        }
    }

    /// Applies `rotation` after the node's current local rotation.
    pub fn rotate(&mut self, id: NodeId, rotation: Quaternion<f32>) {
        if let Some(node) = self.get_mut(id) {
            node.rotation = node.rotation * rotation;
        }
    }

    pub fn set_rotation(&mut self, id: NodeId, rotation: Quaternion<f32>) {
        if let Some(node) = self.get_mut(id) {
            node.rotation = rotation;
        }
    }

    pub fn set_scale(&mut self, id: NodeId, scale: Vector3<f32>) {
        if let Some(node) = self.get_mut(id) {
            node.scale = scale;
        }
    }

    /// Parent world matrix times local matrix, up to the root.
    ///
    /// Unknown ids yield the identity.
    pub fn world_matrix(&self, id: NodeId) -> Matrix4<f32> {
        let mut world = Matrix4::one();
        let mut cursor = Some(id);

        while let Some(current) = cursor {
            let Some(node) = self.get(current) else { break };
            world = node.local_matrix() * world;
            cursor = node.parent;
        }

        world
    }

    pub fn children_of(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, node)| node.parent == Some(id))
            .map(|(index, _)| NodeId(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Deg, Rotation3, Vector4};

    fn apply(m: Matrix4<f32>, p: Vector3<f32>) -> Vector3<f32> {
        let v = m * Vector4::new(p.x, p.y, p.z, 1.0);
        Vector3::new(v.x, v.y, v.z)
    }

    fn assert_close(a: Vector3<f32>, b: Vector3<f32>) {
        assert!((a - b).x.abs() < 1e-5, "{a:?} != {b:?}");
        assert!((a - b).y.abs() < 1e-5, "{a:?} != {b:?}");
        assert!((a - b).z.abs() < 1e-5, "{a:?} != {b:?}");
    }

    #[test]
    fn world_matrix_composes_parent_first() {
        let mut tree = TransformTree::new();
        let root = tree.insert(None);
        let child = tree.insert(Some(root));

        tree.translate(root, Vector3::new(1.0, 0.0, 0.0));
        tree.rotate(root, Quaternion::from_angle_z(Deg(90.0)));
        tree.translate(child, Vector3::new(2.0, 0.0, 0.0));

        // Child sits 2 units along the parent's rotated x axis (world +y).
        let origin = apply(tree.world_matrix(child), Vector3::new(0.0, 0.0, 0.0));
        assert_close(origin, Vector3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn parent_scale_reaches_children() {
        let mut tree = TransformTree::new();
        let root = tree.insert(None);
        let child = tree.insert(Some(root));

        tree.set_scale(root, Vector3::new(2.0, 2.0, 2.0));
        tree.translate(child, Vector3::new(0.0, 1.0, 0.0));

        let origin = apply(tree.world_matrix(child), Vector3::new(0.0, 0.0, 0.0));
        assert_close(origin, Vector3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn children_are_listed_in_insertion_order() {
        let mut tree = TransformTree::new();
        let root = tree.insert(None);
        let a = tree.insert(Some(root));
        let _grandchild = tree.insert(Some(a));
        let b = tree.insert(Some(root));

        assert_eq!(tree.children_of(root).collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(tree.get(b).and_then(Transform::parent), Some(root));
        assert_eq!(tree.len(), 4);
    }
}
