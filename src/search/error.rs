use std::time::Duration;
use thiserror::Error;

/// Why a search run ended without a trace. A run that hits any of these is
/// discarded as a whole; no partial result is meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("no solution could be found after expanding {expanded} states")]
    NoSolutionFound { expanded: usize },
    #[error("time limit of {limit:?} exceeded")]
    TimeLimitExceeded { limit: Duration },
    #[error("memory limit of {limit_mb} MB exceeded")]
    MemoryLimitExceeded { limit_mb: usize },
}

/// A property a solution trace fails to satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    #[error("trace is empty")]
    Empty,
    #[error("trace starts at {found} instead of the initial state {expected}")]
    WrongInitialState { expected: String, found: String },
    #[error("step {step}: transition {transition} is not applicable in {state}")]
    NotApplicable {
        step: usize,
        transition: String,
        state: String,
    },
    #[error("step {step}: transition {transition} does not lead to {state}")]
    WrongSuccessor {
        step: usize,
        transition: String,
        state: String,
    },
    #[error("step {step}: {state} violates the invariant: {reason}")]
    InvariantViolated {
        step: usize,
        state: String,
        reason: String,
    },
    #[error("trace does not reach a goal state, final state is {state}")]
    GoalNotReached { state: String },
}
