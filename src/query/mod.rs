//! Derived metrics over a parsed [`Solid`](crate::model::Solid).

mod area;
mod bounding_box;
mod duplicates;

pub use area::SurfaceArea;
pub use bounding_box::{Aabb, BoundingBox};
pub use duplicates::CheckDuplicates;
