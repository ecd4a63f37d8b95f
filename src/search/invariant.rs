use std::borrow::Cow;
use thiserror::Error;

/// The reason a candidate state was rejected by an [`Invariant`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct Violation {
    reason: Cow<'static, str>,
}

impl Violation {
    pub fn new(reason: impl Into<Cow<'static, str>>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// A validity predicate pruning illegal states before they enter the
/// frontier. Must be pure: the same state always yields the same verdict.
pub trait Invariant<S> {
    fn check(&self, state: &S) -> Result<(), Violation>;

    fn holds(&self, state: &S) -> bool {
        self.check(state).is_ok()
    }
}

/// Accepts every state. Used when no invariant is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl<S> Invariant<S> for AcceptAll {
    fn check(&self, _state: &S) -> Result<(), Violation> {
        Ok(())
    }
}

impl<S, F> Invariant<S> for F
where
    F: Fn(&S) -> bool,
{
    fn check(&self, state: &S) -> Result<(), Violation> {
        if self(state) {
            Ok(())
        } else {
            Err(Violation::new("rejected by invariant"))
        }
    }
}
