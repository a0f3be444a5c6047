/// Options controlling how strictly the grammar is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    /// Require exactly three numbers per vector and three vertices per loop.
    ///
    /// When disabled, short vectors are zero-filled and short vertex lists
    /// are padded with zero vectors.
    pub strict: bool,
    /// Treat a `-` directly followed by a digit as the sign of a number.
    pub signed_numbers: bool,
}

impl ParseConfig {
    /// The historical behaviour: lenient counts, unsigned numbers only.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            strict: false,
            signed_numbers: false,
        }
    }

    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[must_use]
    pub fn with_signed_numbers(mut self, signed_numbers: bool) -> Self {
        self.signed_numbers = signed_numbers;
        self
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            strict: true,
            signed_numbers: true,
        }
    }
}
