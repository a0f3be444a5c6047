//! Reader for ASCII STL files.
//!
//! Text is tokenized by [`lexer::Scanner`], matched against the STL grammar
//! by [`parser::Parser`], and turned into a [`Solid`] whose surface area,
//! bounding box and duplicate facets can then be queried.
//!
//! ```
//! let text = "solid tri
//! facet normal 0 0 1
//!   outer loop
//!     vertex 0 0 0
//!     vertex 4 0 0
//!     vertex 0 3 0
//!   endloop
//! endfacet
//! endsolid tri
//! ";
//! let solid = stlparse::parse(text.as_bytes())?;
//! assert_eq!(solid.facet_count(), 1);
//! assert!((solid.surface_area() - 6.0).abs() < 1e-12);
//! # Ok::<(), stlparse::StlError>(())
//! ```

pub mod config;
pub mod error;
pub mod lexer;
pub mod math;
pub mod model;
pub mod parser;
pub mod query;

pub use config::ParseConfig;
pub use error::{ParseError, Result, Stage, StlError};
pub use model::{Facet, Solid};
pub use parser::{parse, parse_file, parse_with, Parser};
pub use query::Aabb;
