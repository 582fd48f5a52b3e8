use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Sub};

use crate::geometry::tolerance::{clamp, norm2};

pub type VertexId = u32;
pub type EdgeId = u32;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }
    #[inline]
    pub fn dot(self, o: Vec2) -> f32 {
        self.x * o.x + self.y * o.y
    }
    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }
    #[inline]
    pub fn distance(self, o: Vec2) -> f32 {
        (self - o).length()
    }
    /// Unit vector in the same direction, or zero for (near) zero-length input.
    #[inline]
    pub fn normalized(self) -> Vec2 {
        let ((x, y), _) = norm2(self.x, self.y);
        Vec2 { x, y }
    }
    /// `self + t * (o - self)`; `t = 0` yields `self`, `t = 1` yields `o`.
    #[inline]
    pub fn lerp(self, o: Vec2, t: f32) -> Vec2 {
        Vec2 {
            x: self.x + t * (o.x - self.x),
            y: self.y + t * (o.y - self.y),
        }
    }
    /// Unsigned angle in radians between two unit vectors, in `[0, PI]`.
    #[inline]
    pub fn angle_to(self, o: Vec2) -> f32 {
        clamp(self.dot(o), -1.0, 1.0).acos()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, o: Vec2) -> Vec2 {
        Vec2 { x: self.x + o.x, y: self.y + o.y }
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, o: Vec2) {
        self.x += o.x;
        self.y += o.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, o: Vec2) -> Vec2 {
        Vec2 { x: self.x - o.x, y: self.y - o.y }
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, s: f32) -> Vec2 {
        Vec2 { x: self.x * s, y: self.y * s }
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    fn div(self, s: f32) -> Vec2 {
        Vec2 { x: self.x / s, y: self.y / s }
    }
}

impl From<(f32, f32)> for Vec2 {
    fn from((x, y): (f32, f32)) -> Self {
        Vec2 { x, y }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Node {
    pub x: f32,
    pub y: f32,
}

impl Node {
    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2 { x: self.x, y: self.y }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Edge {
    pub a: VertexId,
    pub b: VertexId,
}

impl Edge {
    /// Endpoint opposite `v`. Returns `a` when `v` is not `b`.
    #[inline]
    pub fn other(&self, v: VertexId) -> VertexId {
        if self.a == v {
            self.b
        } else {
            self.a
        }
    }
}

/// Topological role of a vertex, derived from its valence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Valence {
    Isolated,
    Boundary,
    Regular,
    Junction,
}

impl Valence {
    #[inline]
    pub fn from_count(n: usize) -> Self {
        match n {
            0 => Valence::Isolated,
            1 => Valence::Boundary,
            2 => Valence::Regular,
            _ => Valence::Junction,
        }
    }
}

/// Closed curve. The closing vertex is not repeated; `edges[i]` joins
/// `vertices[i]` and `vertices[(i + 1) % len]`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Loop {
    pub vertices: Vec<VertexId>,
    pub edges: Vec<EdgeId>,
    pub points: Vec<Vec2>,
}

impl Loop {
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Open curve. `edges[i]` joins `vertices[i]` and `vertices[i + 1]`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub vertices: Vec<VertexId>,
    pub edges: Vec<EdgeId>,
    pub points: Vec<Vec2>,
}

impl Path {
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
    pub fn start(&self) -> Option<VertexId> {
        self.vertices.first().copied()
    }
    pub fn end(&self) -> Option<VertexId> {
        self.vertices.last().copied()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Curves {
    pub loops: Vec<Loop>,
    pub paths: Vec<Path>,
}

impl Curves {
    pub fn edge_count(&self) -> usize {
        self.loops.iter().map(|l| l.edges.len()).sum::<usize>()
            + self.paths.iter().map(|p| p.edges.len()).sum::<usize>()
    }
    pub fn is_empty(&self) -> bool {
        self.loops.is_empty() && self.paths.is_empty()
    }
}
