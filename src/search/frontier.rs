//! The frontier holds discovered states that are waiting to be expanded and
//! picks the next one according to the [`SearchOrder`].

use crate::search::{Cost, CostFunction, NodeId, SearchOrder, SearchSpace, State};
use itertools::Itertools;
use std::collections::VecDeque;

#[derive(Debug)]
pub struct Frontier<C> {
    order: SearchOrder,
    queue: VecDeque<NodeId>,
    /// Cost of the last state selected under cost-guided order. Every
    /// frontier state is costed against this value, not against its own
    /// predecessor.
    running_cost: C,
}

impl<C: Cost> Frontier<C> {
    pub fn new(order: SearchOrder, initial_cost: C) -> Self {
        Self {
            order,
            queue: VecDeque::new(),
            running_cost: initial_cost,
        }
    }

    /// Admit a node. Membership is checked by the caller against the search
    /// space before pushing.
    pub fn push(&mut self, node_id: NodeId) {
        self.queue.push_back(node_id);
    }

    /// Remove and return the next node to expand, or `None` if the frontier
    /// is exhausted.
    pub fn pop<S: State, T: Clone>(
        &mut self,
        search_space: &SearchSpace<S, T>,
        cost_function: &dyn CostFunction<S, C>,
    ) -> Option<NodeId> {
        match self.order {
            SearchOrder::DepthFirst => self.queue.pop_back(),
            SearchOrder::BreadthFirst => self.queue.pop_front(),
            SearchOrder::CostGuided => {
                let mut costs: Vec<C> = self
                    .queue
                    .iter()
                    .map(|&node_id| {
                        cost_function.cost(search_space.get_state(node_id), &self.running_cost)
                    })
                    .collect();
                // Ties go to the earliest admitted state
                let index = costs.iter().position_min()?;
                self.running_cost = costs.swap_remove(index);
                self.queue.remove(index)
            }
        }
    }

    pub fn running_cost(&self) -> &C {
        &self.running_cost
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}
