//! Recursive-descent parser for the ASCII STL grammar.
//!
//! ```text
//! solid      := SOLID WORD NEWLINE (facet NEWLINE)+ ENDSOLID WORD
//! facet      := FACET NORMAL vector NEWLINE
//!               OUTER LOOP NEWLINE
//!               vertexline{3}
//!               ENDLOOP NEWLINE
//!               ENDFACET
//! vertexline := VERTEX vector NEWLINE
//! vector     := NUMBER{3}
//! ```
//!
//! The parser keeps exactly one token of pushback. Any grammar violation
//! aborts the whole parse; nested failures are wrapped with the stage that
//! was being matched.

use std::collections::VecDeque;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, trace};

use crate::config::ParseConfig;
use crate::error::{ParseError, Result, Stage};
use crate::lexer::{Scanner, Token, TokenKind};
use crate::math::Vector3;
use crate::model::{Facet, Solid};

/// Anything that can hand the parser one token at a time.
pub trait TokenSource {
    /// Returns the next token; [`TokenKind::Eof`] once the source is drained.
    fn next_token(&mut self) -> Token;
}

impl<R: Read> TokenSource for Scanner<R> {
    fn next_token(&mut self) -> Token {
        Scanner::next_token(self)
    }
}

impl TokenSource for VecDeque<Token> {
    fn next_token(&mut self) -> Token {
        self.pop_front().unwrap_or_else(Token::eof)
    }
}

/// Parses a single [`Solid`] from a [`TokenSource`].
pub struct Parser<S> {
    source: S,
    config: ParseConfig,
    peeked: Option<Token>,
}

impl<R: Read> Parser<Scanner<R>> {
    /// Creates a parser over `reader` with the default configuration.
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, ParseConfig::default())
    }

    pub fn with_config(reader: R, config: ParseConfig) -> Self {
        let scanner = Scanner::new(reader).with_signed_numbers(config.signed_numbers);
        Self::from_source(scanner, config)
    }
}

impl<S: TokenSource> Parser<S> {
    /// Creates a parser over an arbitrary token source.
    ///
    /// `config.signed_numbers` only affects scanners built by
    /// [`Parser::with_config`]; a custom source decides for itself.
    pub fn from_source(source: S, config: ParseConfig) -> Self {
        Self {
            source,
            config,
            peeked: None,
        }
    }

    /// Parses the solid.
    ///
    /// # Errors
    ///
    /// Returns an error on the first token that does not fit the grammar, or
    /// if the closing name differs from the opening one.
    pub fn parse(mut self) -> std::result::Result<Solid, ParseError> {
        debug!(strict = self.config.strict, "parsing solid");
        match self.parse_solid() {
            Ok(solid) => {
                debug!(name = %solid.name, facets = solid.facets.len(), "parsed solid");
                Ok(solid)
            }
            Err(err) => {
                debug!("parse failed: {err}");
                Err(err)
            }
        }
    }

    fn parse_solid(&mut self) -> std::result::Result<Solid, ParseError> {
        self.expect(TokenKind::Solid, Stage::Solid, "'solid'")?;
        let name = self
            .expect(TokenKind::Word, Stage::Solid, "name of solid")?
            .text;
        self.expect(TokenKind::Newline, Stage::Solid, "'newline'")?;

        let mut facets = Vec::new();
        loop {
            let facet = self
                .parse_facet()
                .map_err(|err| err.within(Stage::Solid, "facet"))?;
            trace!(index = facets.len(), "parsed facet");
            facets.push(facet);

            self.expect(TokenKind::Newline, Stage::Solid, "'newline'")?;

            let token = self.read_ignoring_ws();
            if token.is(TokenKind::EndSolid) {
                break;
            }
            self.unread(token);
        }

        let close = self
            .expect(TokenKind::Word, Stage::Solid, "name of solid")?
            .text;
        if close != name {
            return Err(ParseError::NameMismatch { open: name, close });
        }

        Ok(Solid::new(name, facets))
    }

    fn parse_facet(&mut self) -> std::result::Result<Facet, ParseError> {
        self.expect(TokenKind::Facet, Stage::Facet, "'facet'")?;
        self.expect(TokenKind::Normal, Stage::Facet, "'normal'")?;
        let normal = self
            .parse_vector()
            .map_err(|err| err.within(Stage::Facet, "normal vector"))?;
        self.expect(TokenKind::Newline, Stage::Facet, "'newline'")?;

        self.expect(TokenKind::Outer, Stage::Facet, "'outer'")?;
        self.expect(TokenKind::Loop, Stage::Facet, "'loop'")?;
        self.expect(TokenKind::Newline, Stage::Facet, "'newline'")?;

        let vertices = self
            .parse_vertices()
            .map_err(|err| err.within(Stage::Facet, "vertices"))?;

        self.expect(TokenKind::EndLoop, Stage::Facet, "'endloop'")?;
        self.expect(TokenKind::Newline, Stage::Facet, "'newline'")?;
        self.expect(TokenKind::EndFacet, Stage::Facet, "'endfacet'")?;

        Ok(Facet::new(normal, vertices))
    }

    /// Reads `vertex` lines until `endloop`, which is left for the caller.
    fn parse_vertices(&mut self) -> std::result::Result<Vec<Vector3>, ParseError> {
        let mut vertices = Vec::with_capacity(3);
        loop {
            let token = self.read_ignoring_ws();
            if token.is(TokenKind::EndLoop) {
                self.unread(token);
                break;
            }
            if !token.is(TokenKind::Vertex) {
                return Err(ParseError::unexpected(
                    Stage::Vertices,
                    "'vertex'",
                    &token.to_string(),
                ));
            }
            if vertices.len() == 3 {
                return Err(ParseError::TooManyVertices);
            }

            let vertex = self
                .parse_vector()
                .map_err(|err| err.within(Stage::Vertices, "vector"))?;
            vertices.push(vertex);

            self.expect(TokenKind::Newline, Stage::Vertices, "'newline'")?;
        }

        if vertices.len() != 3 {
            if self.config.strict {
                return Err(ParseError::TooFewVertices {
                    found: vertices.len(),
                });
            }
            vertices.resize(3, Vector3::zeros());
        }
        Ok(vertices)
    }

    /// Reads numbers up to the end of the line; the newline is left unread.
    fn parse_vector(&mut self) -> std::result::Result<Vector3, ParseError> {
        let mut points = [0.0; 3];
        let mut count = 0;
        loop {
            let token = self.read_ignoring_ws();
            if token.is(TokenKind::Newline) {
                self.unread(token);
                break;
            }
            if !token.is(TokenKind::Number) {
                return Err(ParseError::unexpected(
                    Stage::Vector,
                    "'number'",
                    &token.to_string(),
                ));
            }
            if count == points.len() {
                return Err(ParseError::TooManyPoints);
            }
            points[count] = token
                .text
                .parse::<f64>()
                .map_err(|source| ParseError::InvalidNumber {
                    text: token.text.clone(),
                    source,
                })?;
            count += 1;
        }

        if self.config.strict && count != points.len() {
            return Err(ParseError::TooFewPoints { found: count });
        }
        Ok(Vector3::new(points[0], points[1], points[2]))
    }

    fn expect(
        &mut self,
        kind: TokenKind,
        stage: Stage,
        expected: &'static str,
    ) -> std::result::Result<Token, ParseError> {
        let token = self.read_ignoring_ws();
        if token.is(kind) {
            Ok(token)
        } else {
            Err(ParseError::unexpected(stage, expected, &token.to_string()))
        }
    }

    fn read(&mut self) -> Token {
        self.peeked
            .take()
            .unwrap_or_else(|| self.source.next_token())
    }

    /// Reads the next token, skipping at most one whitespace token.
    fn read_ignoring_ws(&mut self) -> Token {
        let token = self.read();
        if token.is(TokenKind::Ws) {
            self.read()
        } else {
            token
        }
    }

    fn unread(&mut self, token: Token) {
        debug_assert!(self.peeked.is_none(), "only one token of pushback");
        self.peeked = Some(token);
    }
}

/// Parses a solid from `reader` with the default configuration.
///
/// # Errors
///
/// Returns [`StlError::Parse`](crate::StlError::Parse) if the text does not
/// fit the grammar.
pub fn parse<R: Read>(reader: R) -> Result<Solid> {
    parse_with(reader, ParseConfig::default())
}

/// Parses a solid from `reader` with an explicit configuration.
///
/// # Errors
///
/// Returns [`StlError::Parse`](crate::StlError::Parse) if the text does not
/// fit the grammar.
pub fn parse_with<R: Read>(reader: R, config: ParseConfig) -> Result<Solid> {
    Ok(Parser::with_config(reader, config).parse()?)
}

/// Opens `path` and parses the solid it contains.
///
/// # Errors
///
/// Returns [`StlError::Io`](crate::StlError::Io) if the file cannot be
/// opened, or [`StlError::Parse`](crate::StlError::Parse) if its contents do
/// not fit the grammar.
pub fn parse_file(path: impl AsRef<Path>, config: ParseConfig) -> Result<Solid> {
    let file = File::open(path.as_ref())?;
    parse_with(file, config)
}
