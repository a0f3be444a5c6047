use crate::math::Vector3;
use crate::model::Solid;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Vector3,
    /// Maximum corner of the bounding box.
    pub max: Vector3,
}

impl Aabb {
    /// Extent along each axis.
    #[must_use]
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    #[must_use]
    pub fn center(&self) -> Vector3 {
        (self.min + self.max) * 0.5
    }
}

/// Computes the axis-aligned bounding box of a solid.
///
/// Every vertex of every facet is considered on all three axes.
pub struct BoundingBox<'a> {
    solid: &'a Solid,
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(solid: &'a Solid) -> Self {
        Self { solid }
    }

    /// Executes the query, returning the AABB, or `None` if the solid has no
    /// vertices.
    #[must_use]
    pub fn execute(&self) -> Option<Aabb> {
        let mut vertices = self.solid.facets.iter().flat_map(|f| f.vertices.iter());
        let first = vertices.next()?;
        let aabb = vertices.fold(
            Aabb {
                min: *first,
                max: *first,
            },
            |aabb, v| Aabb {
                min: aabb.min.inf(v),
                max: aabb.max.sup(v),
            },
        );
        Some(aabb)
    }
}
