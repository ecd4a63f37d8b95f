mod cost;
mod diagnostics;
mod error;
mod frontier;
mod invariant;
mod search_node;
mod search_order;
mod search_space;
mod search_statistics;
mod state;
mod state_space;
mod successor_generator;
mod termination_condition;
mod trace;
mod transition;
mod validate;
mod verbosity;

pub use cost::{Cost, CostFunction, FloatCost, ZeroCost};
pub use diagnostics::{DiagnosticSink, Recorder, Silent, TracingSink};
pub use error::{SearchError, TraceError};
pub(crate) use frontier::Frontier;
pub use invariant::{AcceptAll, Invariant, Violation};
pub use search_node::{NodeId, SearchNode, SearchNodeStatus};
pub use search_order::SearchOrder;
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
pub use state::State;
pub use state_space::{SearchResult, StateSpace};
pub use successor_generator::SuccessorGenerator;
pub use termination_condition::{SearchLimits, TerminationCondition};
pub use trace::Trace;
pub use transition::Transition;
pub use validate::validate;
pub use verbosity::Verbosity;
