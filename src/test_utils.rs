use crate::search::{
    validate, Cost, SearchOrder, State, StateSpace, SuccessorGenerator, Trace, Transition,
};
use serde::Serialize;
use std::collections::HashMap;

pub const ALL_ORDERS: [SearchOrder; 3] = [
    SearchOrder::DepthFirst,
    SearchOrder::BreadthFirst,
    SearchOrder::CostGuided,
];

/// An explicit directed graph over numbered states. Successors are emitted in
/// the order the edges were given.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    edges: HashMap<u32, Vec<u32>>,
}

impl Graph {
    pub fn new(edges: &[(u32, u32)]) -> Self {
        let mut graph = Self::default();
        for &(from, to) in edges {
            graph.edges.entry(from).or_default().push(to);
        }
        graph
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Goto(pub u32);

impl Transition<u32> for Goto {
    fn apply(&self, state: &mut u32) {
        *state = self.0;
    }
}

impl SuccessorGenerator<u32> for Graph {
    type Transition = Goto;

    fn transitions(&self, state: &u32) -> Vec<Goto> {
        self.edges
            .get(state)
            .map(|targets| targets.iter().map(|&to| Goto(to)).collect())
            .unwrap_or_default()
    }
}

pub fn assert_trace_valid<S, G, C>(
    space: &StateSpace<S, G, C>,
    trace: &Trace<S, G::Transition>,
    goal: impl Fn(&S) -> bool,
) where
    S: State,
    G: SuccessorGenerator<S>,
    C: Cost,
{
    if let Err(error) = validate(space, trace, goal) {
        panic!("invalid trace {:?}: {}", trace.states(), error);
    }
}
