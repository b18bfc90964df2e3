use std::fmt;
use std::rc::Rc;

use parsel::Parser;

/// A binary operator of one precedence level.
///
/// The operator is a pair of a symbol matcher and a transform. The symbol
/// matcher recognizes the operator in the input; its own output is discarded
/// at construction, only the input advance matters. The transform combines
/// the two operand values into the value of the whole expression.
///
/// Operators are immutable; cloning one shares the symbol parser and the
/// transform.
pub struct BinaryOperator<T: 'static> {
    pub(crate) symbol: Parser<()>,
    pub(crate) transform: Rc<dyn Fn(T, T) -> T>,
    pub(crate) label: String,
}

/// A unary operator of one precedence level.
///
/// Like [`BinaryOperator`], but the transform maps a single operand value.
/// Whether the operator precedes or trails its operand is decided by the
/// precedence level it is declared in, not by the operator itself.
pub struct UnaryOperator<T: 'static> {
    pub(crate) symbol: Parser<()>,
    pub(crate) transform: Rc<dyn Fn(T) -> T>,
    pub(crate) label: String,
}

/// Declares a binary operator from a symbol parser and a transform.
///
/// The output of `symbol` is discarded; any parser recognizing the operator
/// symbol will do. `label` names the operator in diagnostics and may be
/// empty.
pub fn binary_operator<S: 'static, T: 'static>(
    symbol: Parser<S>,
    transform: impl Fn(T, T) -> T + 'static,
    label: impl Into<String>,
) -> BinaryOperator<T> {
    BinaryOperator {
        symbol: symbol.discard(),
        transform: Rc::new(transform),
        label: label.into(),
    }
}

/// Declares a unary operator from a symbol parser and a transform.
///
/// The output of `symbol` is discarded; any parser recognizing the operator
/// symbol will do. `label` names the operator in diagnostics and may be
/// empty.
pub fn unary_operator<S: 'static, T: 'static>(
    symbol: Parser<S>,
    transform: impl Fn(T) -> T + 'static,
    label: impl Into<String>,
) -> UnaryOperator<T> {
    UnaryOperator {
        symbol: symbol.discard(),
        transform: Rc::new(transform),
        label: label.into(),
    }
}

impl<T: 'static> BinaryOperator<T> {
    /// Returns the label the operator was declared with.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<T: 'static> UnaryOperator<T> {
    /// Returns the label the operator was declared with.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<T: 'static> Clone for BinaryOperator<T> {
    fn clone(&self) -> Self {
        Self {
            symbol: self.symbol.clone(),
            transform: Rc::clone(&self.transform),
            label: self.label.clone(),
        }
    }
}

impl<T: 'static> Clone for UnaryOperator<T> {
    fn clone(&self) -> Self {
        Self {
            symbol: self.symbol.clone(),
            transform: Rc::clone(&self.transform),
            label: self.label.clone(),
        }
    }
}

impl<T: 'static> fmt::Debug for BinaryOperator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryOperator")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl<T: 'static> fmt::Debug for UnaryOperator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnaryOperator")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
