use serde::{Deserialize, Serialize};

/// An identifier of a feature (vertex or face) of a convex shape.
///
/// This identifier is shape-dependent and is such that it allows an efficient
/// retrieval of the geometric information of the feature. The narrow phase uses
/// packed feature id pairs to match contact points across successive steps.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureId {
    /// Shape-dependent identifier of a vertex.
    Vertex(u32),
    /// Shape-dependent identifier of a face.
    Face(u32),
    /// Unknown identifier.
    Unknown,
}

impl FeatureId {
    /// Packs this feature id into a single `u32`.
    ///
    /// Vertices map to even values, faces to odd values, matching the
    /// `index * 2` / `index * 2 + 1` convention used by the contact
    /// generators. `Unknown` maps to `u32::MAX`.
    pub fn packed(self) -> u32 {
        match self {
            FeatureId::Vertex(id) => id * 2,
            FeatureId::Face(id) => id * 2 + 1,
            FeatureId::Unknown => u32::MAX,
        }
    }
}
