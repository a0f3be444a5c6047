use crate::model::{Facet, Solid};

/// Computes the total surface area of a solid.
///
/// Sums [`Facet::area`] over every facet; facets without exactly three
/// vertices contribute nothing.
pub struct SurfaceArea<'a> {
    solid: &'a Solid,
}

impl<'a> SurfaceArea<'a> {
    /// Creates a new `SurfaceArea` query.
    #[must_use]
    pub fn new(solid: &'a Solid) -> Self {
        Self { solid }
    }

    /// Executes the query, returning the total surface area.
    #[must_use]
    pub fn execute(&self) -> f64 {
        self.solid.facets.iter().map(Facet::area).sum()
    }
}
