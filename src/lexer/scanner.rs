use std::io::{self, BufReader, Bytes, Read};

use tracing::warn;

use super::{Token, TokenKind};

/// Turns a byte source into [`Token`]s, one call to [`next_token`] at a time.
///
/// Holds at most one byte of pushback, which is all maximal-run scanning
/// needs. A read failure is logged and then treated as end of input; once
/// the source is exhausted every further call yields [`TokenKind::Eof`].
///
/// [`next_token`]: Scanner::next_token
pub struct Scanner<R> {
    bytes: Bytes<BufReader<R>>,
    pending: Option<u8>,
    exhausted: bool,
    signed_numbers: bool,
}

impl<R: Read> Scanner<R> {
    /// Creates a scanner that does not recognise signed numbers.
    pub fn new(reader: R) -> Self {
        Self {
            bytes: BufReader::new(reader).bytes(),
            pending: None,
            exhausted: false,
            signed_numbers: false,
        }
    }

    /// Enables or disables scanning a leading `-` as part of a number.
    #[must_use]
    pub fn with_signed_numbers(mut self, signed_numbers: bool) -> Self {
        self.signed_numbers = signed_numbers;
        self
    }

    /// Scans the next token.
    pub fn next_token(&mut self) -> Token {
        let Some(b) = self.read() else {
            return Token::eof();
        };

        match b {
            b if is_blank(b) => Token::new(TokenKind::Ws, self.scan_run(b, is_blank)),
            b if b.is_ascii_alphabetic() => self.scan_word(b),
            b if b.is_ascii_digit() => self.scan_number(String::new(), b),
            b'\n' => Token::new(TokenKind::Newline, "\n"),
            b'\r' => match self.read() {
                Some(b'\n') => Token::new(TokenKind::Newline, "\r\n"),
                next => {
                    self.unread(next);
                    Token::new(TokenKind::Illegal, "\r")
                }
            },
            b'-' if self.signed_numbers => match self.read() {
                Some(d) if d.is_ascii_digit() => self.scan_number(String::from("-"), d),
                next => {
                    self.unread(next);
                    Token::new(TokenKind::Illegal, "-")
                }
            },
            other => Token::new(TokenKind::Illegal, char::from(other)),
        }
    }

    fn read(&mut self) -> Option<u8> {
        if let Some(b) = self.pending.take() {
            return Some(b);
        }
        if self.exhausted {
            return None;
        }
        match self.bytes.next() {
            Some(Ok(b)) => Some(b),
            Some(Err(err)) => {
                warn!("lexer: error reading input, treating as end of input: {err}");
                self.exhausted = true;
                None
            }
            None => {
                self.exhausted = true;
                None
            }
        }
    }

    fn unread(&mut self, b: Option<u8>) {
        debug_assert!(self.pending.is_none(), "only one byte of pushback");
        self.pending = b;
    }

    /// Collects `first` and every following byte accepted by `accept`.
    fn scan_run(&mut self, first: u8, accept: fn(u8) -> bool) -> String {
        let mut text = String::from(char::from(first));
        self.extend_run(&mut text, accept);
        text
    }

    fn extend_run(&mut self, text: &mut String, accept: fn(u8) -> bool) {
        loop {
            match self.read() {
                Some(b) if accept(b) => text.push(char::from(b)),
                next => {
                    self.unread(next);
                    return;
                }
            }
        }
    }

    fn scan_word(&mut self, first: u8) -> Token {
        let text = self.scan_run(first, |b| b.is_ascii_alphabetic());
        let kind = TokenKind::keyword(&text).unwrap_or(TokenKind::Word);
        Token::new(kind, text)
    }

    /// Scans `digits [ '.' digits ]`, appending to `text` (which may hold a sign).
    fn scan_number(&mut self, mut text: String, first: u8) -> Token {
        text.push(char::from(first));
        self.extend_run(&mut text, |b| b.is_ascii_digit());
        match self.read() {
            Some(b'.') => {
                text.push('.');
                self.extend_run(&mut text, |b| b.is_ascii_digit());
            }
            next => self.unread(next),
        }
        Token::new(TokenKind::Number, text)
    }
}

impl<R: Read> Iterator for Scanner<R> {
    type Item = Token;

    /// Yields tokens up to, but not including, the end-of-input token.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is(TokenKind::Eof)).then_some(token)
    }
}

fn is_blank(b: u8) -> bool {
    b == b' ' || b == b'\t'
}
