use std::fmt;
use std::num::ParseFloatError;

use thiserror::Error;

/// Top-level error type for reading STL solids.
#[derive(Debug, Error)]
pub enum StlError {
    #[error("unable to open file: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// The grammar rule that was being matched when a parse failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Solid,
    Facet,
    Vertices,
    Vector,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Solid => "parse",
            Self::Facet => "parse facet",
            Self::Vertices => "parse vertices",
            Self::Vector => "parse vector",
        })
    }
}

/// Errors raised while matching the token stream against the STL grammar.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("{stage}: found [{found}], expected {expected}")]
    Unexpected {
        stage: Stage,
        expected: &'static str,
        found: String,
    },

    #[error("parse vector: too many points in vector")]
    TooManyPoints,

    #[error("parse vector: expected 3 points in vector, found {found}")]
    TooFewPoints { found: usize },

    #[error("parse vertices: too many vertices in facet")]
    TooManyVertices,

    #[error("parse vertices: expected 3 vertices in facet, found {found}")]
    TooFewVertices { found: usize },

    #[error("parse: solid names do not match [{open}] and [{close}]")]
    NameMismatch { open: String, close: String },

    #[error("parse vector: unable to parse [{text}] into float")]
    InvalidNumber {
        text: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("{stage}: unable to parse {what}: {source}")]
    Context {
        stage: Stage,
        what: &'static str,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    pub(crate) fn unexpected(stage: Stage, expected: &'static str, found: &str) -> Self {
        Self::Unexpected {
            stage,
            expected,
            found: found.to_owned(),
        }
    }

    /// Wraps `self` with the enclosing stage.
    #[must_use]
    pub fn within(self, stage: Stage, what: &'static str) -> Self {
        Self::Context {
            stage,
            what,
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, skipping every layer of stage context.
    #[must_use]
    pub fn root_cause(&self) -> &ParseError {
        match self {
            Self::Context { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Convenience type alias for results using [`StlError`].
pub type Result<T> = std::result::Result<T, StlError>;
