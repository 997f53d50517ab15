//! Visitor results for registry traversal.

/// What a [`for_each`](crate::Registry::for_each) visitor wants to happen next.
///
/// Early termination is a distinct tag rather than a reserved error value, so a
/// visitor's genuine failure can never be confused with a request to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a visitor result decides whether traversal continues"]
pub enum Visit<E> {
    /// Move on to the next bucket.
    Continue,
    /// End the traversal now. `for_each` reports success.
    Stop,
    /// End the traversal now and hand this error to the caller.
    Fail(E),
}

impl<E> Visit<E> {
    /// Returns true if traversal should go on.
    pub fn is_continue(&self) -> bool {
        matches!(self, Visit::Continue)
    }

    /// Maps the error carried by [`Visit::Fail`].
    pub fn map_err<F, O>(self, op: O) -> Visit<F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Visit::Continue => Visit::Continue,
            Visit::Stop => Visit::Stop,
            Visit::Fail(err) => Visit::Fail(op(err)),
        }
    }
}

/// `Ok(())` continues, `Err(e)` fails. Lets a visitor reuse a fallible helper.
impl<E> From<Result<(), E>> for Visit<E> {
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Visit::Continue,
            Err(err) => Visit::Fail(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result() {
        assert_eq!(Visit::<&str>::from(Ok(())), Visit::Continue);
        assert_eq!(Visit::from(Err::<(), _>("boom")), Visit::Fail("boom"));
    }

    #[test]
    fn test_map_err() {
        let visit: Visit<u8> = Visit::Fail(7);
        assert_eq!(visit.map_err(u32::from), Visit::Fail(7u32));
        assert_eq!(Visit::<u8>::Stop.map_err(u32::from), Visit::Stop);
        assert_eq!(Visit::<u8>::Continue.map_err(u32::from), Visit::Continue);
    }

    #[test]
    fn test_is_continue() {
        assert!(Visit::<()>::Continue.is_continue());
        assert!(!Visit::<()>::Stop.is_continue());
        assert!(!Visit::Fail(()).is_continue());
    }
}
