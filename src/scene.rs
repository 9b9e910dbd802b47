use glam::Vec3;

use crate::math::AABB;
use crate::types::{InstanceData, UvRect};

/// Handle to a node, valid for the lifetime of the scene that issued it
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NodeKind {
    Cube,
    Tile { uv: UvRect },
    Obstacle,
    Voxel,
    Camera,
}

#[derive(Clone, Debug)]
pub struct Node {
    pub name: String,
    pub kind: NodeKind,
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
    pub color: [f32; 3],
    pub visible: bool,
}

impl Node {
    pub fn new(name: impl Into<String>, kind: NodeKind, position: Vec3) -> Self {
        Self {
            name: name.into(),
            kind,
            position,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            color: [1.0, 1.0, 1.0],
            visible: true,
        }
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }

    /// World bounds of a unit cube under this node's scale (rotation ignored).
    pub fn bounds(&self) -> AABB {
        AABB::from_center_size(self.position, self.scale)
    }

    pub fn to_instance(&self) -> InstanceData {
        let mut data = InstanceData::new(self.position, self.rotation, self.scale, self.color);
        data.visible = if self.visible { 1.0 } else { 0.0 };
        if let NodeKind::Tile { uv } = self.kind {
            data.uv_offset = uv.offset;
            data.uv_scale = uv.scale;
        }
        data
    }
}

/// Flat node store. Nodes are only ever added, so handles never dangle.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    nodes: Vec<Node>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    pub fn instances(&self) -> Vec<InstanceData> {
        self.nodes.iter().map(Node::to_instance).collect()
    }

    /// Bounds of all visible node positions.
    pub fn bounds(&self) -> Option<AABB> {
        AABB::enclosing(self.nodes.iter().filter(|n| n.visible).map(|n| n.position))
    }
}
