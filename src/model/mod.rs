//! The in-memory solid: a name and an ordered list of triangular facets.

mod facet;
mod solid;

pub use facet::Facet;
pub use solid::Solid;
