use crate::query::{Aabb, BoundingBox, CheckDuplicates, SurfaceArea};

use super::Facet;

/// A named solid: the facets of one `solid ... endsolid` block, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
    pub name: String,
    pub facets: Vec<Facet>,
}

impl Solid {
    #[must_use]
    pub fn new(name: impl Into<String>, facets: Vec<Facet>) -> Self {
        Self {
            name: name.into(),
            facets,
        }
    }

    #[must_use]
    pub fn facet_count(&self) -> usize {
        self.facets.len()
    }

    /// Sum of every facet's area.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        SurfaceArea::new(self).execute()
    }

    /// Axis-aligned bounds of every vertex, or `None` if there are none.
    #[must_use]
    pub fn bounding_box(&self) -> Option<Aabb> {
        BoundingBox::new(self).execute()
    }

    /// Returns `true` if two facets share a fingerprint.
    #[must_use]
    pub fn check_duplicates(&self) -> bool {
        CheckDuplicates::new(self).execute()
    }
}
