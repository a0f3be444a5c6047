use std::collections::HashSet;

use crate::model::Solid;

/// Detects facets that repeat an earlier facet's fingerprint.
///
/// Fingerprints round to one decimal place and keep vertex order, so a
/// permuted copy of a triangle is not a duplicate.
pub struct CheckDuplicates<'a> {
    solid: &'a Solid,
}

impl<'a> CheckDuplicates<'a> {
    /// Creates a new `CheckDuplicates` query.
    #[must_use]
    pub fn new(solid: &'a Solid) -> Self {
        Self { solid }
    }

    /// Executes the query, returning `true` at the first repeated fingerprint.
    #[must_use]
    pub fn execute(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.solid.facets.len());
        self.solid
            .facets
            .iter()
            .any(|facet| !seen.insert(facet.fingerprint()))
    }
}
