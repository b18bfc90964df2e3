//! Building expression parsers from operator tables.
//!
//! Instead of writing one grammar rule per precedence level by hand, this
//! crate compiles an ordered table of operator declarations plus a base
//! "term" parser into a single [`parsel::Parser`] implementing precedence
//! climbing. A table entry is one precedence level: binary operators with
//! left, right or no associativity, or unary operators in prefix or postfix
//! position. Levels are listed tightest-binding first, and operators within
//! a level are tried in declared order.
//!
//! ```rust
//! use parsel::prim::{digits, literal};
//! use parsel_expr::{binary_operator, expression, left_assoc, prefix, unary_operator};
//!
//! let parser = expression(
//!     digits(),
//!     vec![
//!         prefix(vec![unary_operator(literal("-"), |x: i64| -x, "negation")]),
//!         left_assoc(vec![
//!             binary_operator(literal("*"), |a, b| a * b, "multiplication"),
//!             binary_operator(literal("/"), |a, b| a / b, "division"),
//!         ]),
//!         left_assoc(vec![
//!             binary_operator(literal("+"), |a, b| a + b, "addition"),
//!             binary_operator(literal("-"), |a, b| a - b, "subtraction"),
//!         ]),
//!     ],
//! );
//!
//! assert_eq!(parser.run("2+3*4").into_result().unwrap(), (14, ""));
//! ```
//!
//! The failure behavior is deliberately plain: the first failure of the term
//! parser, or of an operand required after an operator symbol has matched,
//! is reported unchanged. There is no backtracking across levels and no
//! error recovery.

#![warn(missing_docs)]
mod expr;
mod operator;

pub use expr::{expression, left_assoc, non_assoc, postfix, prefix, right_assoc, Precedence};
pub use operator::{binary_operator, unary_operator, BinaryOperator, UnaryOperator};

#[cfg(test)]
mod tests;
