use crate::math::Vector3;

/// A triangular surface element with its normal.
///
/// Vertices are kept in file order. Only facets with exactly three vertices
/// have an area; anything else is treated as degenerate.
#[derive(Debug, Clone, PartialEq)]
pub struct Facet {
    pub normal: Vector3,
    pub vertices: Vec<Vector3>,
}

impl Facet {
    #[must_use]
    pub fn new(normal: Vector3, vertices: Vec<Vector3>) -> Self {
        Self { normal, vertices }
    }

    /// Creates a facet from exactly three vertices.
    #[must_use]
    pub fn triangle(normal: Vector3, vertices: [Vector3; 3]) -> Self {
        Self::new(normal, vertices.to_vec())
    }

    /// Returns the area of the triangle, or `0.0` unless there are exactly
    /// three vertices.
    #[must_use]
    pub fn area(&self) -> f64 {
        let [v0, v1, v2] = self.vertices.as_slice() else {
            return 0.0;
        };
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;
        edge1.cross(&edge2).norm() * 0.5
    }

    /// Returns a lossy key for duplicate detection.
    ///
    /// Each vertex is written as its x, y and z rounded to one decimal place,
    /// and vertices are joined with `:` in their stored order.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        self.vertices
            .iter()
            .map(|v| format!("{:.1}{:.1}{:.1}", v.x, v.y, v.z))
            .collect::<Vec<_>>()
            .join(":")
    }
}
