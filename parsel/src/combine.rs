/// Payload types that can be merged when two sequential parse results are
/// combined.
///
/// [`ParseResult::mappend`][crate::ParseResult::mappend] requires this bound
/// on the payload, which makes combining two successes of incompatible
/// payload kinds a type error instead of a runtime fault.
pub trait Combine {
    /// Merges `other` into `self`, keeping the order in which the values
    /// were parsed.
    fn combine(self, other: Self) -> Self;
}

impl Combine for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Combine for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Combine for () {
    #[inline]
    fn combine(self, (): Self) -> Self {}
}
