use glam::Vec2;

/// A closed loop of vertices; the edge from the last vertex back to the
/// first is implicit.
///
/// Vertex order is significant (it defines edge adjacency). A polygon needs
/// at least three vertices to be drawable.
pub type Polygon = Vec<Vec2>;
