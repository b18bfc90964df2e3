use assert_matches::assert_matches;

use parsel::prim::{digits, literal};
use parsel::ParseResult::Success;
use parsel::Parser;

use crate::{
    binary_operator, expression, left_assoc, non_assoc, postfix, prefix, right_assoc,
    unary_operator, BinaryOperator, Precedence, UnaryOperator,
};

/// Term parser producing the digits as a parenthesizable string, to make the
/// grouping chosen by a level visible in the output.
fn term_ast() -> Parser<String> {
    digits().map(|n| n.to_string())
}

fn infix_ast(symbol: &str) -> BinaryOperator<String> {
    let symbol = symbol.to_owned();
    let shown = symbol.clone();
    binary_operator(
        literal(symbol),
        move |a, b| format!("({a}{shown}{b})"),
        "",
    )
}

fn negation() -> UnaryOperator<i64> {
    unary_operator(literal("-"), |x: i64| -x, "negation")
}

fn arithmetic() -> Vec<Precedence<i64>> {
    vec![
        prefix(vec![negation()]),
        left_assoc(vec![
            binary_operator(literal("*"), |a, b| a * b, "multiplication"),
            binary_operator(literal("/"), |a, b| a / b, "division"),
        ]),
        left_assoc(vec![
            binary_operator(literal("+"), |a, b| a + b, "addition"),
            binary_operator(literal("-"), |a, b| a - b, "subtraction"),
        ]),
    ]
}

#[test]
fn left_assoc_groups_to_the_left() {
    let level = left_assoc(vec![infix_ast("+")]);
    let parser = level.build_level(term_ast());
    let (output, remainder) = parser.run("1+2+3").into_result().unwrap();
    assert_eq!(output, "((1+2)+3)");
    assert_eq!(remainder, "");
}

#[test]
fn left_assoc_with_zero_repetitions_is_the_bare_operand() {
    let level = left_assoc(vec![infix_ast("+")]);
    let parser = level.build_level(term_ast());
    assert_eq!(parser.run("7").into_result().unwrap(), ("7".to_owned(), ""));
}

#[test]
fn right_assoc_groups_to_the_right() {
    let level = right_assoc(vec![infix_ast("^")]);
    let parser = level.build_level(term_ast());
    let (output, _) = parser.run("2^3^2").into_result().unwrap();
    assert_eq!(output, "(2^(3^2))");

    let level = right_assoc(vec![binary_operator(
        literal("^"),
        |a: i64, b| a.pow(b as u32),
        "power",
    )]);
    let parser = level.build_level(digits());
    assert_matches!(parser.run("2^3^2"), Success { output: 512, .. });
}

#[test]
fn non_assoc_does_not_chain() {
    let level = non_assoc(infix_ast("=="));
    let parser = level.build_level(term_ast());

    let (output, remainder) = parser.run("1==2").into_result().unwrap();
    assert_eq!(output, "(1==2)");
    assert_eq!(remainder, "");

    // The second `==` is never consumed at this level, so a caller that
    // requires the whole input fails downstream.
    let (output, remainder) = parser.run("1==2==3").into_result().unwrap();
    assert_eq!(output, "(1==2)");
    assert_eq!(remainder, "==3");
}

#[test]
fn prefix_applies_zero_or_more_times() {
    let level = prefix(vec![negation()]);
    let parser = level.build_level(digits());
    assert_matches!(parser.run("--5"), Success { output: 5, remainder: "" });
    assert_matches!(parser.run("-5"), Success { output: -5, remainder: "" });
    assert_matches!(parser.run("5"), Success { output: 5, remainder: "" });
}

#[test]
fn prefix_applies_outermost_first() {
    // `#` doubles, `~` adds three. In `#~5` the `#` is encountered first
    // and must wrap the rest: (5 + 3) * 2, not 5 * 2 + 3.
    let level = prefix(vec![
        unary_operator(literal("#"), |x: i64| x * 2, "double"),
        unary_operator(literal("~"), |x: i64| x + 3, "plus three"),
    ]);
    let parser = level.build_level(digits());
    assert_matches!(parser.run("#~5"), Success { output: 16, remainder: "" });
    assert_matches!(parser.run("~#5"), Success { output: 13, remainder: "" });
}

#[test]
fn postfix_applies_in_encounter_order() {
    let level = postfix(vec![unary_operator(
        literal("!"),
        |x| format!("({x}!)"),
        "factorial",
    )]);
    let parser = level.build_level(term_ast());
    let (output, remainder) = parser.run("5!!").into_result().unwrap();
    assert_eq!(output, "((5!)!)");
    assert_eq!(remainder, "");
}

#[test]
fn earlier_levels_bind_tighter() {
    let parser = expression(digits(), arithmetic());
    assert_matches!(parser.run("2+3*4"), Success { output: 14, remainder: "" });
    assert_matches!(parser.run("2*3+4"), Success { output: 10, remainder: "" });
    assert_matches!(parser.run("-2+3"), Success { output: 1, remainder: "" });
    assert_matches!(parser.run("7-4-2"), Success { output: 1, remainder: "" });
    assert_matches!(parser.run("12/3/2"), Success { output: 2, remainder: "" });
}

#[test]
fn earliest_declared_operator_wins() {
    // Both `**` and `*` could match at a `*`; the declared order decides,
    // without further lookahead.
    let level = left_assoc(vec![
        binary_operator(literal("**"), |a: i64, b| a.pow(b as u32), "power"),
        binary_operator(literal("*"), |a, b| a * b, "multiplication"),
    ]);
    let parser = level.build_level(digits());
    assert_matches!(parser.run("2**3"), Success { output: 8, remainder: "" });
    assert_matches!(parser.run("2*3"), Success { output: 6, remainder: "" });
}

#[test]
fn term_failures_propagate_verbatim() {
    let direct = digits().run("abc").into_result().unwrap_err();
    let through_table = expression(digits(), arithmetic())
        .run("abc")
        .into_result()
        .unwrap_err();
    assert_eq!(direct, through_table);
}

#[test]
fn required_operand_failures_propagate_verbatim() {
    let parser = expression(digits(), arithmetic());

    // After `+` has matched, the right operand is mandatory.
    let failure = parser.run("1+").into_result().unwrap_err();
    assert_eq!(failure.expected, "digits");
    assert_eq!(failure.got, "end of input");

    let level = right_assoc(vec![infix_ast("^")]);
    let parser = level.build_level(term_ast());
    assert!(parser.run("2^").is_fail());
}

#[test]
fn an_empty_table_returns_the_term_unchanged() {
    let parser = expression(digits(), vec![]);
    assert_matches!(parser.run("42abc"), Success { output: 42, remainder: "abc" });
    assert_eq!(
        parser.run("abc").into_result().unwrap_err(),
        digits().run("abc").into_result().unwrap_err()
    );
}

#[test]
#[should_panic(expected = "at least one operator")]
fn an_empty_operator_list_is_a_contract_violation() {
    let _ = left_assoc::<i64>(vec![]);
}
