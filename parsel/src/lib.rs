//! The Parsel crate is a small toolkit for writing parser combinators.
//!
//! Parsers are plain values: a [`Parser<T>`] wraps a function from an input
//! string to a [`ParseResult`] over that input, and combinators build larger
//! parsers out of smaller ones. There is no grammar description and no code
//! generation; composing functions is the whole mechanism. The toolkit
//! targets synchronous, side-effect-free, first-failure-reporting parsers:
//!
//! * _Pure and reentrant_: running a parser is a pure function from input to
//!   result. No state is shared between runs, so clones of one parser can be
//!   used from independent threads on independent inputs without
//!   synchronization.
//!
//! * _Remainder carrying_: every [`ParseResult`], including failures,
//!   carries the unconsumed suffix of the input. Sequencing runs the next
//!   parser on the remainder of the previous one, and failure positions can
//!   be reported without a separate cursor.
//!
//! * _First-failure reporting_: when a parse fails, the failure of the first
//!   parser that could not proceed is returned unchanged. There is no error
//!   recovery and no merging of failure context; a failure describes what
//!   was expected and what was found at one position.
//!
//! * _Two error channels_: unexpected input produces [`ParseFailure`] values
//!   that callers inspect and choose between. Misusing the library itself,
//!   such as reading the output of a failed result, is a contract violation
//!   and panics.
//!
//! ## Using Parsel
//!
//! The [`prim`] module provides predicate-based leaf parsers. Everything
//! else is built by combining those, either with the methods of [`Parser`]
//! or by writing the run function directly:
//!
//! ```rust
//! use parsel::prim::{digits, literal};
//!
//! let version = literal("v").discard();
//! let parser = digits();
//!
//! let tail = version.run("v42").remainder();
//! let result = parser.run(tail);
//! assert_eq!(result.into_result().unwrap(), (42, ""));
//! ```
//!
//! The expression-table builder in the `parsel-expr` crate sits on top of
//! this crate and turns operator declarations into full expression parsers.

#![warn(missing_docs)]
mod combine;
mod parser;
mod result;

pub mod prim;

pub use combine::Combine;
pub use parser::Parser;
pub use result::{ParseFailure, ParseResult};

pub use ParseResult::*;
