use std::rc::Rc;

use parsel::{ParseResult, Parser};
use ParseResult::{Discarded, Failure, Success};

use crate::{BinaryOperator, UnaryOperator};

/// One precedence level of an expression table.
///
/// A level groups the operators that bind equally tightly and fixes how
/// repeated occurrences at that level associate. Binary levels are
/// left-associative, right-associative or non-associative; unary levels
/// place their operators before or after the operand.
///
/// Levels are built with [`left_assoc`], [`right_assoc`], [`non_assoc`],
/// [`prefix`] and [`postfix`], and consumed by [`expression`].
pub enum Precedence<T: 'static> {
    /// Binary operators grouping to the left: `1+2+3` parses as `(1+2)+3`.
    LeftAssoc(Vec<BinaryOperator<T>>),
    /// Binary operators grouping to the right: `2^3^2` parses as `2^(3^2)`.
    RightAssoc(Vec<BinaryOperator<T>>),
    /// A binary operator that does not chain: `1==2==3` is not consumed
    /// past `1==2` at this level.
    NonAssoc(BinaryOperator<T>),
    /// Unary operators preceding their operand, applied outermost first.
    Prefix(Vec<UnaryOperator<T>>),
    /// Unary operators trailing their operand, applied in encounter order.
    Postfix(Vec<UnaryOperator<T>>),
}

/// Groups binary operators into a left-associative precedence level.
///
/// # Panics
///
/// Panics when `operators` is empty; a precedence level without operators
/// is a bug in the declaring code.
pub fn left_assoc<T: 'static>(operators: Vec<BinaryOperator<T>>) -> Precedence<T> {
    assert!(
        !operators.is_empty(),
        "a left-associative level requires at least one operator"
    );
    Precedence::LeftAssoc(operators)
}

/// Groups binary operators into a right-associative precedence level.
///
/// # Panics
///
/// Panics when `operators` is empty.
pub fn right_assoc<T: 'static>(operators: Vec<BinaryOperator<T>>) -> Precedence<T> {
    assert!(
        !operators.is_empty(),
        "a right-associative level requires at least one operator"
    );
    Precedence::RightAssoc(operators)
}

/// Makes a single binary operator a non-associative precedence level.
pub fn non_assoc<T: 'static>(operator: BinaryOperator<T>) -> Precedence<T> {
    Precedence::NonAssoc(operator)
}

/// Groups unary operators into a prefix precedence level.
///
/// # Panics
///
/// Panics when `operators` is empty.
pub fn prefix<T: 'static>(operators: Vec<UnaryOperator<T>>) -> Precedence<T> {
    assert!(
        !operators.is_empty(),
        "a prefix level requires at least one operator"
    );
    Precedence::Prefix(operators)
}

/// Groups unary operators into a postfix precedence level.
///
/// # Panics
///
/// Panics when `operators` is empty.
pub fn postfix<T: 'static>(operators: Vec<UnaryOperator<T>>) -> Precedence<T> {
    assert!(
        !operators.is_empty(),
        "a postfix level requires at least one operator"
    );
    Precedence::Postfix(operators)
}

impl<T: 'static> Precedence<T> {
    /// Builds the parser for this precedence level around `operand`, the
    /// parser for everything that binds tighter.
    ///
    /// On all levels, a failure of `operand`, or of an operand required
    /// after an operator symbol has matched, is returned unchanged. Once an
    /// operator symbol has matched, the level is committed to it; there is
    /// no backtracking across levels.
    pub fn build_level(self, operand: Parser<T>) -> Parser<T> {
        match self {
            Precedence::LeftAssoc(ops) => build_left_assoc(ops.into(), operand),
            Precedence::RightAssoc(ops) => build_right_assoc(ops.into(), operand),
            Precedence::NonAssoc(op) => build_non_assoc(op, operand),
            Precedence::Prefix(ops) => build_prefix(ops.into(), operand),
            Precedence::Postfix(ops) => build_postfix(ops.into(), operand),
        }
    }
}

/// Builds an expression parser from a term parser and an expression table.
///
/// The table lists precedence levels with the tightest-binding level first;
/// the fold wraps each level around the result of the previous one, so an
/// earlier level ends up as the operand of a later one. An empty table
/// returns `term` unchanged.
///
/// When `term` fails on some input, the built parser fails with exactly that
/// failure, whatever the table contains.
pub fn expression<T: 'static>(term: Parser<T>, table: Vec<Precedence<T>>) -> Parser<T> {
    table
        .into_iter()
        .fold(term, |operand, level| level.build_level(operand))
}

/// Runs a symbol matcher, returning the remainder on a match.
///
/// Successful and discarded results both count as a match; only a failure
/// means the operator is not present.
fn match_symbol<'i>(symbol: &Parser<()>, input: &'i str) -> Option<&'i str> {
    match symbol.run(input) {
        Success { remainder, .. } | Discarded { remainder } => Some(remainder),
        Failure(_) => None,
    }
}

/// Returns the first operator, in declared order, whose symbol matches at
/// the start of `input`, together with the remainder after the symbol.
fn leading_binary<'a, 'i, T: 'static>(
    operators: &'a [BinaryOperator<T>],
    input: &'i str,
) -> Option<(&'a BinaryOperator<T>, &'i str)> {
    operators
        .iter()
        .find_map(|op| match_symbol(&op.symbol, input).map(|rest| (op, rest)))
}

fn leading_unary<'a, 'i, T: 'static>(
    operators: &'a [UnaryOperator<T>],
    input: &'i str,
) -> Option<(&'a UnaryOperator<T>, &'i str)> {
    operators
        .iter()
        .find_map(|op| match_symbol(&op.symbol, input).map(|rest| (op, rest)))
}

/// `operand (op operand)*`, applying transforms as soon as a right operand
/// is parsed, so the accumulator groups to the left.
///
/// The repetition is a loop, not recursion; the stack depth does not grow
/// with the number of operator occurrences.
fn build_left_assoc<T: 'static>(ops: Rc<[BinaryOperator<T>]>, operand: Parser<T>) -> Parser<T> {
    Parser::new(move |input| {
        let (mut acc, mut rest) = match operand.run(input).into_result() {
            Ok(parts) => parts,
            Err(err) => return Failure(err),
        };
        while let Some((op, after_symbol)) = leading_binary(&ops, rest) {
            match operand.run(after_symbol).into_result() {
                Ok((rhs, after_rhs)) => {
                    acc = (*op.transform)(acc, rhs);
                    rest = after_rhs;
                }
                Err(err) => return Failure(err),
            }
        }
        Success {
            output: acc,
            remainder: rest,
        }
    })
}

/// `operand (op <same level>)?`; the right side re-enters the whole level,
/// which is what makes the grouping right-nested.
fn build_right_assoc<T: 'static>(ops: Rc<[BinaryOperator<T>]>, operand: Parser<T>) -> Parser<T> {
    Parser::new(move |input| right_assoc_level(&ops, &operand, input))
}

fn right_assoc_level<'i, T: 'static>(
    ops: &[BinaryOperator<T>],
    operand: &Parser<T>,
    input: &'i str,
) -> ParseResult<'i, T> {
    let (left, rest) = match operand.run(input).into_result() {
        Ok(parts) => parts,
        Err(err) => return Failure(err),
    };
    let (op, after_symbol) = match leading_binary(ops, rest) {
        Some(matched) => matched,
        None => {
            return Success {
                output: left,
                remainder: rest,
            }
        }
    };
    match right_assoc_level(ops, operand, after_symbol).into_result() {
        Ok((right, after)) => Success {
            output: (*op.transform)(left, right),
            remainder: after,
        },
        Err(err) => Failure(err),
    }
}

/// `operand (op operand)?` without a loop; a second occurrence at this
/// precedence is left in the remainder and makes the overall parse fail
/// downstream.
fn build_non_assoc<T: 'static>(op: BinaryOperator<T>, operand: Parser<T>) -> Parser<T> {
    Parser::new(move |input| {
        let (left, rest) = match operand.run(input).into_result() {
            Ok(parts) => parts,
            Err(err) => return Failure(err),
        };
        let after_symbol = match match_symbol(&op.symbol, rest) {
            Some(after_symbol) => after_symbol,
            None => {
                return Success {
                    output: left,
                    remainder: rest,
                }
            }
        };
        match operand.run(after_symbol).into_result() {
            Ok((right, after)) => Success {
                output: (*op.transform)(left, right),
                remainder: after,
            },
            Err(err) => Failure(err),
        }
    })
}

/// `op* operand`, with the transforms applied outermost first: the operator
/// encountered first wraps the whole rest.
///
/// Matching is a loop; only the collected transforms are applied in reverse.
fn build_prefix<T: 'static>(ops: Rc<[UnaryOperator<T>]>, operand: Parser<T>) -> Parser<T> {
    Parser::new(move |input| {
        let mut transforms = vec![];
        let mut rest = input;
        while let Some((op, after_symbol)) = leading_unary(&ops, rest) {
            transforms.push(Rc::clone(&op.transform));
            rest = after_symbol;
        }
        match operand.run(rest).into_result() {
            Ok((mut value, after)) => {
                for transform in transforms.into_iter().rev() {
                    value = (*transform)(value);
                }
                Success {
                    output: value,
                    remainder: after,
                }
            }
            Err(err) => Failure(err),
        }
    })
}

/// `operand op*`, applying each transform as its symbol is encountered,
/// left to right.
fn build_postfix<T: 'static>(ops: Rc<[UnaryOperator<T>]>, operand: Parser<T>) -> Parser<T> {
    Parser::new(move |input| {
        let (mut value, mut rest) = match operand.run(input).into_result() {
            Ok(parts) => parts,
            Err(err) => return Failure(err),
        };
        while let Some((op, after_symbol)) = leading_unary(&ops, rest) {
            value = (*op.transform)(value);
            rest = after_symbol;
        }
        Success {
            output: value,
            remainder: rest,
        }
    })
}
