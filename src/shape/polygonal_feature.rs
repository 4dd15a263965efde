use crate::math::{Isometry, Point};

/// The local polygonal approximation of a face of a convex shape.
#[derive(Debug, Copy, Clone)]
pub struct PolygonalFeature {
    /// The two vertices forming this polygonal feature.
    pub vertices: [Point; 2],
    /// The feature IDs of this feature's vertices.
    pub vids: [u32; 2],
    /// The feature ID of this feature itself.
    pub fid: u32,
}

impl PolygonalFeature {
    /// Transforms the vertices of `self` by the given position `pos`.
    pub fn transform_by(&mut self, pos: &Isometry) {
        self.vertices[0] = pos * self.vertices[0];
        self.vertices[1] = pos * self.vertices[1];
    }
}
