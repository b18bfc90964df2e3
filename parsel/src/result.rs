use thiserror::Error;

use crate::Combine;

/// The outcome of running a parser on some input.
///
/// Every variant carries the `remainder`, the suffix of the input that was
/// left unconsumed on that branch. Failures carry it too, so that the
/// position of the failure can be reported without threading a separate
/// cursor through the parsers.
///
/// Parse failures are ordinary values that a caller can inspect, for example
/// to try another parser on the same input. Reading the output of a result
/// that is not a [`Success`], or the expectation of a result that is not a
/// [`Failure`], is a contract violation of the calling combinator and
/// panics; it is never caused by unexpected input.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseResult<'i, T> {
    /// The input matched and was consumed up to `remainder`.
    Success {
        /// The parsed value.
        output: T,
        /// The unconsumed suffix of the input.
        remainder: &'i str,
    },
    /// The input did not match the expected input of the parser.
    Failure(ParseFailure<'i>),
    /// A successful parse whose output was intentionally dropped.
    ///
    /// A discarded result contributes no value when results are combined,
    /// but it still advances the cursor past the consumed input. This is
    /// what delimiters and operator symbols produce.
    Discarded {
        /// The unconsumed suffix of the input.
        remainder: &'i str,
    },
}

use ParseResult::{Discarded, Failure, Success};

/// A parse failure, carrying what was expected, what was found instead, and
/// the unconsumed input at the failure position.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected {expected}, got {got}")]
pub struct ParseFailure<'i> {
    /// Description of the expected input.
    pub expected: String,
    /// Description of the input actually found, or `"end of input"`.
    pub got: String,
    /// The unconsumed input at the position of the failure.
    pub remainder: &'i str,
}

impl<'i, T> ParseResult<'i, T> {
    /// Creates a successful result.
    #[inline]
    pub fn success(output: T, remainder: &'i str) -> Self {
        Success { output, remainder }
    }

    /// Creates a failed result.
    #[inline]
    pub fn fail(
        expected: impl Into<String>,
        got: impl Into<String>,
        remainder: &'i str,
    ) -> Self {
        Failure(ParseFailure {
            expected: expected.into(),
            got: got.into(),
            remainder,
        })
    }

    /// Creates a discarded result.
    #[inline]
    pub fn discard(remainder: &'i str) -> Self {
        Discarded { remainder }
    }

    /// Returns whether the result is a [`Success`].
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Success { .. })
    }

    /// Returns whether the result is a [`Failure`].
    #[inline]
    pub fn is_fail(&self) -> bool {
        matches!(self, Failure(_))
    }

    /// Returns whether the result is [`Discarded`].
    #[inline]
    pub fn is_discarded(&self) -> bool {
        matches!(self, Discarded { .. })
    }

    /// Returns the unconsumed suffix of the input.
    #[inline]
    pub fn remainder(&self) -> &'i str {
        match self {
            Success { remainder, .. } | Discarded { remainder } => remainder,
            Failure(err) => err.remainder,
        }
    }

    /// Returns the parsed value.
    ///
    /// # Panics
    ///
    /// Panics when the result is not a [`Success`].
    #[inline]
    pub fn output(self) -> T {
        match self {
            Success { output, .. } => output,
            _ => panic!("cannot read the output of a parse result that is not a success"),
        }
    }

    /// Returns the expectation of a failed result.
    ///
    /// # Panics
    ///
    /// Panics when the result is not a [`Failure`].
    #[inline]
    pub fn expected(&self) -> &str {
        match self {
            Failure(err) => &err.expected,
            _ => panic!("cannot read the expectation of a parse result that is not a failure"),
        }
    }

    /// Returns the found input of a failed result.
    ///
    /// # Panics
    ///
    /// Panics when the result is not a [`Failure`].
    #[inline]
    pub fn got(&self) -> &str {
        match self {
            Failure(err) => &err.got,
            _ => panic!("cannot read the found input of a parse result that is not a failure"),
        }
    }

    /// Splits the result into the parsed value and the remainder, keeping a
    /// failure intact.
    ///
    /// This is the `Result` view of a parse outcome, for callers that want
    /// to use `?` or `match` instead of the panicking accessors.
    ///
    /// # Panics
    ///
    /// Panics when the result is [`Discarded`], since a discarded result has
    /// no value to return. Running a value parser that was built from
    /// discarding parsers only is a bug in the calling combinator.
    #[inline]
    pub fn into_result(self) -> Result<(T, &'i str), ParseFailure<'i>> {
        match self {
            Success { output, remainder } => Ok((output, remainder)),
            Failure(err) => Err(err),
            Discarded { .. } => {
                panic!("cannot read the output of a discarded parse result")
            }
        }
    }

    /// Replaces a successfully parsed value with the value returned when
    /// applying `transform` to it.
    ///
    /// Failures and discarded results are returned unchanged.
    #[inline]
    pub fn map<U>(self, transform: impl FnOnce(T) -> U) -> ParseResult<'i, U> {
        match self {
            Success { output, remainder } => Success {
                output: transform(output),
                remainder,
            },
            Failure(err) => Failure(err),
            Discarded { remainder } => Discarded { remainder },
        }
    }

    /// Returns the first successful result if any, and otherwise the first
    /// failing one.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        if self.is_fail() && !other.is_fail() {
            other
        } else {
            self
        }
    }
}

impl<'i, T: Combine> ParseResult<'i, T> {
    /// Combines two results obtained from sequentially applying two parsers
    /// to one logical construct.
    ///
    /// The first failure wins and is returned unchanged, without merging any
    /// context into it. A [`Discarded`] result contributes no value but
    /// still advances the cursor, so `success(s, r).mappend(discard(r2))`
    /// is `success(s, r2)`. Two successes combine their values with
    /// [`Combine::combine`] and keep the remainder of the second.
    pub fn mappend(self, other: Self) -> Self {
        match (self, other) {
            (err @ Failure(_), _) => err,
            (_, err @ Failure(_)) => err,
            (Success { output, .. }, Discarded { remainder }) => Success { output, remainder },
            (
                Success { output, .. },
                Success {
                    output: second,
                    remainder,
                },
            ) => Success {
                output: output.combine(second),
                remainder,
            },
            (Discarded { .. }, second) => second,
        }
    }
}
