//! The reachability engine: explores the states reachable from an initial
//! state and returns a trace to the first goal state selected.

use crate::search::{
    AcceptAll, Cost, CostFunction, DiagnosticSink, Frontier, Invariant, SearchError, SearchLimits,
    SearchNodeStatus, SearchOrder, SearchSpace, SearchStatistics, State, SuccessorGenerator,
    TerminationCondition, Trace, TracingSink, Transition, ZeroCost,
};
use std::fmt;
use tracing::{debug, info};

/// Result of one search run.
pub type SearchResult<S, G> =
    Result<Trace<S, <G as SuccessorGenerator<S>>::Transition>, SearchError>;

/// A state space defined by an initial state, a successor generator, an
/// invariant over admissible states and, for cost-guided search, a cost
/// function with its initial cost.
///
/// The space itself holds no search state: each call to [`StateSpace::check`]
/// builds its own frontier, explored set and trace map and drops them when it
/// returns, so repeated calls are independent of each other.
pub struct StateSpace<S: State, G, C = usize> {
    initial_state: S,
    initial_cost: C,
    successor_generator: G,
    invariant: Box<dyn Invariant<S>>,
    cost_function: Box<dyn CostFunction<S, C>>,
    diagnostics: Box<dyn DiagnosticSink>,
    limits: SearchLimits,
}

impl<S, G> StateSpace<S, G, usize>
where
    S: State,
    G: SuccessorGenerator<S>,
{
    /// Create a state space that accepts every state and gives every state
    /// the same cost.
    pub fn new(initial_state: S, successor_generator: G) -> Self {
        Self {
            initial_state,
            initial_cost: 0,
            successor_generator,
            invariant: Box::new(AcceptAll),
            cost_function: Box::new(ZeroCost),
            diagnostics: Box::new(TracingSink),
            limits: SearchLimits::unlimited(),
        }
    }
}

impl<S, G, C> StateSpace<S, G, C>
where
    S: State,
    G: SuccessorGenerator<S>,
    C: Cost,
{
    pub fn with_invariant(mut self, invariant: impl Invariant<S> + 'static) -> Self {
        self.invariant = Box::new(invariant);
        self
    }

    /// Replace the cost function, possibly changing the cost type.
    pub fn with_cost<D: Cost>(
        self,
        initial_cost: D,
        cost_function: impl CostFunction<S, D> + 'static,
    ) -> StateSpace<S, G, D> {
        StateSpace {
            initial_state: self.initial_state,
            initial_cost,
            successor_generator: self.successor_generator,
            invariant: self.invariant,
            cost_function: Box::new(cost_function),
            diagnostics: self.diagnostics,
            limits: self.limits,
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: impl DiagnosticSink + 'static) -> Self {
        self.diagnostics = Box::new(diagnostics);
        self
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn initial_state(&self) -> &S {
        &self.initial_state
    }

    pub fn initial_cost(&self) -> &C {
        &self.initial_cost
    }

    pub fn successor_generator(&self) -> &G {
        &self.successor_generator
    }

    pub fn invariant(&self) -> &dyn Invariant<S> {
        self.invariant.as_ref()
    }

    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Search for a state satisfying `goal` in the given order and return the
    /// trace leading to it.
    ///
    /// # Errors
    ///
    /// [`SearchError::NoSolutionFound`] if every reachable state has been
    /// expanded without reaching a goal, or a limit error if the run was
    /// aborted by its [`SearchLimits`].
    pub fn check(&self, goal: impl Fn(&S) -> bool, order: SearchOrder) -> SearchResult<S, G> {
        self.check_with_statistics(goal, order).0
    }

    /// Same as [`StateSpace::check`], also returning the statistics of the
    /// run.
    pub fn check_with_statistics(
        &self,
        goal: impl Fn(&S) -> bool,
        order: SearchOrder,
    ) -> (SearchResult<S, G>, SearchStatistics) {
        let mut statistics = SearchStatistics::new(order);
        let mut termination = TerminationCondition::new(self.limits);
        let result = self.explore(&goal, order, &mut statistics, &mut termination);
        statistics.finalise_search();
        termination.finalise();
        (result, statistics)
    }

    fn explore(
        &self,
        goal: &dyn Fn(&S) -> bool,
        order: SearchOrder,
        statistics: &mut SearchStatistics,
        termination: &mut TerminationCondition,
    ) -> SearchResult<S, G> {
        let mut search_space: SearchSpace<S, G::Transition> =
            SearchSpace::new(self.initial_state.clone());
        let mut frontier = Frontier::new(order, self.initial_cost.clone());
        frontier.push(search_space.get_root_node_id());
        statistics.register_frontier_size(frontier.len());

        while let Some(node_id) = frontier.pop(&search_space, self.cost_function.as_ref()) {
            if let Some(error) = termination.should_terminate() {
                info!(%error, "aborting search");
                return Err(error);
            }

            let node = search_space.get_node(node_id);
            debug_assert_eq!(node.get_status(), SearchNodeStatus::Open);
            let state = search_space.get_state(node_id).clone();
            if goal(&state) {
                let depth = node.get_depth();
                let trace = search_space.extract_trace(node_id);
                debug!(
                    trace_length = trace.len(),
                    depth,
                    cost = ?frontier.running_cost(),
                    explored_states = search_space.closed_len(),
                    discovered_states = search_space.len(),
                    "goal reached"
                );
                return Ok(trace);
            }

            search_space.close(node_id);
            statistics.increment_expanded_nodes();

            let transitions = self.successor_generator.transitions(&state);
            statistics.increment_generated_transitions(transitions.len());
            for transition in transitions {
                let successor = transition.successor(&state);
                if let Err(violation) = self.invariant.check(&successor) {
                    statistics.increment_pruned_nodes();
                    self.diagnostics
                        .log(format_args!("pruned {:?}: {}", successor, violation));
                    continue;
                }
                match search_space.insert_if_new(successor, transition, node_id) {
                    Some(child_id) => {
                        frontier.push(child_id);
                        statistics.increment_generated_nodes();
                    }
                    None => statistics.increment_duplicate_nodes(),
                }
            }
            statistics.register_frontier_size(frontier.len());
        }

        Err(SearchError::NoSolutionFound {
            expanded: search_space.closed_len(),
        })
    }
}

impl<S: State, G, C: fmt::Debug> fmt::Debug for StateSpace<S, G, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateSpace")
            .field("initial_state", &self.initial_state)
            .field("initial_cost", &self.initial_cost)
            .field("diagnostics", &self.diagnostics)
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{Recorder, Silent};
    use crate::test_utils::*;
    use std::rc::Rc;
    use std::time::Duration;

    fn diamond() -> Graph {
        Graph::new(&[(0, 1), (0, 2), (1, 3), (2, 3)])
    }

    /// 0 reaches 3 in two steps through 1, and in three steps through 2.
    fn uneven() -> Graph {
        Graph::new(&[(0, 1), (0, 2), (1, 3), (2, 5), (5, 3)])
    }

    #[test]
    fn breadth_first_returns_shortest_trace() {
        let space = StateSpace::new(0, uneven()).with_diagnostics(Silent);
        let trace = space.check(|s| *s == 3, SearchOrder::BreadthFirst).unwrap();
        assert_eq!(trace.states(), &[0, 1, 3]);
        assert_eq!(trace.transitions(), &[Goto(1), Goto(3)]);
    }

    #[test]
    fn depth_first_follows_last_emitted_successor() {
        let space = StateSpace::new(0, uneven()).with_diagnostics(Silent);
        let trace = space.check(|s| *s == 3, SearchOrder::DepthFirst).unwrap();
        assert_eq!(trace.states(), &[0, 2, 5, 3]);
    }

    #[test]
    fn cost_guided_prefers_cheaper_states() {
        let space = StateSpace::new(0, diamond())
            .with_diagnostics(Silent)
            .with_cost(0usize, |s: &u32, _: &usize| -> usize { if *s == 2 { 0 } else { 1 } });
        let trace = space.check(|s| *s == 3, SearchOrder::CostGuided).unwrap();
        assert_eq!(trace.states(), &[0, 2, 3]);
    }

    #[test]
    fn cost_guided_with_default_cost_matches_breadth_first() {
        let space = StateSpace::new(0, uneven()).with_diagnostics(Silent);
        let cost_guided = space.check(|s| *s == 3, SearchOrder::CostGuided).unwrap();
        let breadth_first = space.check(|s| *s == 3, SearchOrder::BreadthFirst).unwrap();
        assert_eq!(cost_guided, breadth_first);
    }

    #[test]
    fn initial_goal_yields_single_state_trace() {
        let space = StateSpace::new(0, diamond()).with_diagnostics(Silent);
        for order in ALL_ORDERS {
            let trace = space.check(|s| *s == 0, order).unwrap();
            assert_eq!(trace.states(), &[0]);
            assert!(trace.transitions().is_empty());
        }
    }

    #[test]
    fn cycles_terminate_with_no_solution() {
        let graph = Graph::new(&[(0, 1), (1, 0), (1, 2), (2, 1), (2, 2)]);
        let space = StateSpace::new(0, graph).with_diagnostics(Silent);
        for order in ALL_ORDERS {
            assert_eq!(
                space.check(|s| *s == 9, order),
                Err(SearchError::NoSolutionFound { expanded: 3 })
            );
        }
    }

    #[test]
    fn invariant_prunes_and_reports_candidates() {
        let recorder = Rc::new(Recorder::new());
        let space = StateSpace::new(0, diamond())
            .with_invariant(|s: &u32| *s != 1)
            .with_diagnostics(recorder.clone());
        let trace = space.check(|s| *s == 3, SearchOrder::BreadthFirst).unwrap();
        assert_eq!(trace.states(), &[0, 2, 3]);
        assert_eq!(
            recorder.messages(),
            vec!["pruned 1: rejected by invariant".to_string()]
        );
    }

    #[test]
    fn rejecting_everything_but_the_initial_state_fails() {
        let space = StateSpace::new(0, diamond())
            .with_invariant(|s: &u32| *s == 0)
            .with_diagnostics(Silent);
        for order in ALL_ORDERS {
            assert_eq!(
                space.check(|s| *s == 3, order),
                Err(SearchError::NoSolutionFound { expanded: 1 })
            );
        }
    }

    #[test]
    fn statistics_count_each_state_once() {
        let space = StateSpace::new(0, diamond()).with_diagnostics(Silent);
        let (result, statistics) = space.check_with_statistics(|_| false, SearchOrder::DepthFirst);
        assert!(result.is_err());
        assert_eq!(statistics.expanded_nodes(), 4);
        assert_eq!(statistics.generated_nodes(), 3);
        assert_eq!(statistics.duplicate_nodes(), 1);
        assert_eq!(statistics.generated_transitions(), 4);
        assert_eq!(statistics.peak_frontier_size(), 2);
        assert_eq!(statistics.order(), SearchOrder::DepthFirst);
    }

    #[test]
    fn repeated_searches_are_identical() {
        let space = StateSpace::new(0, uneven())
            .with_diagnostics(Silent)
            .with_cost(0usize, |s: &u32, previous: &usize| -> usize { previous + *s as usize });
        for order in ALL_ORDERS {
            let first = space.check(|s| *s == 3, order);
            let second = space.check(|s| *s == 3, order);
            assert!(first.is_ok());
            assert_eq!(first, second);
        }
    }

    #[test]
    fn every_trace_is_valid() {
        let space = StateSpace::new(0, uneven()).with_diagnostics(Silent);
        for order in ALL_ORDERS {
            let trace = space.check(|s| *s == 3, order).unwrap();
            assert_trace_valid(&space, &trace, |s| *s == 3);
        }
    }

    #[test]
    fn time_limit_aborts_the_run() {
        let space = StateSpace::new(0, diamond())
            .with_diagnostics(Silent)
            .with_limits(SearchLimits::unlimited().with_time_limit(Duration::ZERO));
        assert_eq!(
            space.check(|s| *s == 3, SearchOrder::BreadthFirst),
            Err(SearchError::TimeLimitExceeded {
                limit: Duration::ZERO
            })
        );
    }
}
