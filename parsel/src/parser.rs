use std::rc::Rc;

use crate::{Combine, ParseResult};
use ParseResult::{Discarded, Failure, Success};

/// A parser as a plain, shareable value.
///
/// A `Parser<T>` wraps a function from an input string to a
/// [`ParseResult`] borrowing from that input. Anything with that shape can
/// be lifted into a `Parser` with [`new`][Self::new]; the combinators on
/// this type and the builders of downstream crates never construct
/// primitives themselves.
///
/// Cloning a parser is cheap, it only bumps a reference count. Parsers hold
/// no mutable state and running one has no side effects, so independent
/// inputs can be parsed reentrantly with clones of the same parser.
pub struct Parser<T: 'static> {
    run: Rc<dyn for<'i> Fn(&'i str) -> ParseResult<'i, T>>,
}

impl<T: 'static> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Parser {
            run: Rc::clone(&self.run),
        }
    }
}

impl<T: 'static> Parser<T> {
    /// Lifts a function from input to [`ParseResult`] into a parser.
    pub fn new<F>(run: F) -> Self
    where
        F: for<'i> Fn(&'i str) -> ParseResult<'i, T> + 'static,
    {
        Parser { run: Rc::new(run) }
    }

    /// Runs the parser on `input`.
    ///
    /// The remainder of the returned result is always a suffix of `input`.
    #[inline]
    pub fn run<'i>(&self, input: &'i str) -> ParseResult<'i, T> {
        (self.run)(input)
    }

    /// Replaces the parsed value with the value returned when applying
    /// `transform` to it.
    pub fn map<U: 'static>(self, transform: impl Fn(T) -> U + 'static) -> Parser<U> {
        Parser::new(move |input| self.run(input).map(&transform))
    }

    /// Drops the parsed value, keeping only the advance over the input.
    ///
    /// The resulting parser produces [discarded][ParseResult::Discarded]
    /// results, which contribute no value when sequential results are
    /// combined. This is how delimiters and operator symbols are matched.
    pub fn discard(self) -> Parser<()> {
        Parser::new(move |input| match self.run(input) {
            Success { remainder, .. } | Discarded { remainder } => Discarded { remainder },
            Failure(err) => Failure(err),
        })
    }

    /// Runs `self` and then `next` on the remainder, combining both outputs.
    ///
    /// The first failure is returned unchanged. A discarded side contributes
    /// only its input advance, see [`ParseResult::mappend`].
    pub fn and(self, next: Parser<T>) -> Parser<T>
    where
        T: Combine,
    {
        Parser::new(move |input| {
            let first = self.run(input);
            if first.is_fail() {
                return first;
            }
            let second = next.run(first.remainder());
            first.mappend(second)
        })
    }

    /// Tries `self`, and when it fails, tries `other` on the same input.
    ///
    /// When both fail, the failure of `self` is kept.
    pub fn or(self, other: Parser<T>) -> Parser<T> {
        Parser::new(move |input| {
            let first = self.run(input);
            if first.is_fail() {
                first.or(other.run(input))
            } else {
                first
            }
        })
    }
}
