//! Articulated box figure built on a [`TransformTree`].

use cgmath::{Matrix4, Quaternion, Rad, Rotation3, Vector3};

use crate::transform::{NodeId, TransformTree};

const SKIN: [f32; 4] = [0.93, 0.72, 0.58, 1.0];
const SHIRT: [f32; 4] = [0.16, 0.42, 0.78, 1.0];
const SLEEVE: [f32; 4] = [0.12, 0.33, 0.64, 1.0];
const TROUSERS: [f32; 4] = [0.22, 0.22, 0.26, 1.0];

/// Swing amplitude of arms and legs.
const SWING: f32 = 0.6;
/// Angular frequency of the swing, rad/s.
const SWING_RATE: f32 = 3.0;
const TURN_RATE: f32 = 0.5;

/// Drawable box attached to a node.
///
/// The box is offset and sized in the node's space; neither affects children.
#[derive(Debug, Clone, Copy)]
pub struct Part {
    pub name: &'static str,
    pub node: NodeId,
    pub offset: Vector3<f32>,
    pub size: Vector3<f32>,
    pub color: [f32; 4],
}

impl Part {
    pub fn model_matrix(&self, tree: &TransformTree) -> Matrix4<f32> {
        tree.world_matrix(self.node)
            * Matrix4::from_translation(self.offset)
            * Matrix4::from_nonuniform_scale(self.size.x, self.size.y, self.size.z)
    }
}

#[derive(Debug, Clone, Copy)]
struct Limb {
    shoulder: NodeId,
    elbow: NodeId,
    hip: NodeId,
}

/// Figure rig: `all -> pivot -> torso -> {head, arms, legs}`.
#[derive(Debug)]
pub struct Figure {
    all: NodeId,
    pivot: NodeId,
    left: Limb,
    right: Limb,
    parts: Vec<Part>,
}

impl Figure {
    pub fn build(tree: &mut TransformTree) -> Self {
        let all = tree.insert(None);
        let pivot = tree.insert(Some(all));
        let torso = tree.insert(Some(pivot));
        let head = tree.insert(Some(torso));
        tree.translate(head, Vector3::new(0.0, 1.05, 0.0));

        let mut parts = vec![
            Part {
                name: "torso",
                node: torso,
                offset: Vector3::new(0.0, 0.0, 0.0),
                size: Vector3::new(1.0, 1.4, 0.5),
                color: SHIRT,
            },
            Part {
                name: "head",
                node: head,
                offset: Vector3::new(0.0, 0.0, 0.0),
                size: Vector3::new(0.6, 0.6, 0.6),
                color: SKIN,
            },
        ];

        let left = Self::limb(
            tree,
            torso,
            -1.0,
            ["left upper arm", "left lower arm", "left hand", "left leg"],
            &mut parts,
        );
        let right = Self::limb(
            tree,
            torso,
            1.0,
            ["right upper arm", "right lower arm", "right hand", "right leg"],
            &mut parts,
        );

        Self {
            all,
            pivot,
            left,
            right,
            parts,
        }
    }

    /// Adds arm (upper, lower, hand) and leg for one side; `side` is -1 or 1.
    fn limb(
        tree: &mut TransformTree,
        torso: NodeId,
        side: f32,
        names: [&'static str; 4],
        parts: &mut Vec<Part>,
    ) -> Limb {
        let shoulder = tree.insert(Some(torso));
        tree.translate(shoulder, Vector3::new(side * 0.68, 0.55, 0.0));

        let elbow = tree.insert(Some(shoulder));
        tree.translate(elbow, Vector3::new(0.0, -0.7, 0.0));

        let wrist = tree.insert(Some(elbow));
        tree.translate(wrist, Vector3::new(0.0, -0.6, 0.0));

        let hip = tree.insert(Some(torso));
        tree.translate(hip, Vector3::new(side * 0.25, -0.7, 0.0));

        parts.extend([
            Part {
                name: names[0],
                node: shoulder,
                offset: Vector3::new(0.0, -0.35, 0.0),
                size: Vector3::new(0.3, 0.7, 0.3),
                color: SLEEVE,
            },
            Part {
                name: names[1],
                node: elbow,
                offset: Vector3::new(0.0, -0.3, 0.0),
                size: Vector3::new(0.25, 0.6, 0.25),
                color: SLEEVE,
            },
            Part {
                name: names[2],
                node: wrist,
                offset: Vector3::new(0.0, -0.15, 0.0),
                size: Vector3::new(0.28, 0.3, 0.28),
                color: SKIN,
            },
            Part {
                name: names[3],
                node: hip,
                offset: Vector3::new(0.0, -0.55, 0.0),
                size: Vector3::new(0.36, 1.1, 0.36),
                color: TROUSERS,
            },
        ]);

        Limb {
            shoulder,
            elbow,
            hip,
        }
    }

    /// Root node; moving it moves the whole figure.
    pub fn root(&self) -> NodeId {
        self.all
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Poses the rig for animation time `t` (seconds).
    ///
    /// Arms and legs swing in opposite phase, elbows bend forward only and
    /// the pivot turns at a constant rate. The pose depends on `t` alone.
    pub fn animate(&self, tree: &mut TransformTree, t: f32) {
        let phase = (t * SWING_RATE).sin() * SWING;
        let bend = -(t * SWING_RATE).sin().abs() * SWING * 0.5;

        for (limb, sign) in [(self.left, 1.0), (self.right, -1.0)] {
            tree.set_rotation(limb.shoulder, Quaternion::from_angle_x(Rad(sign * phase)));
            tree.set_rotation(limb.elbow, Quaternion::from_angle_x(Rad(bend)));
            tree.set_rotation(limb.hip, Quaternion::from_angle_x(Rad(-sign * phase)));
        }

        tree.set_rotation(self.pivot, Quaternion::from_angle_y(Rad(t * TURN_RATE)));
    }
}
