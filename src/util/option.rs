pub(crate) trait OptionExtension<T> {
    fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Acts similarly to [`Option::unwrap`] but with [`unreachable!`] in the none branch, marking
    /// a call site where None would mean the set's bookkeeping is corrupt.
    ///
    /// No panics annotation is used so that call sites pass the clippy lint. Using the method
    /// asserts that None is impossible.
    #[track_caller]
    fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None => unreachable!("bookkeeping for a hash-keyed collection is inconsistent"),
        }
    }
}
