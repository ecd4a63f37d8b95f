use crate::search::{NodeId, SearchNode, State, Trace};
use segvec::{Linear, SegVec};
use std::collections::HashMap;

/// A [`SearchSpace`] manages every state discovered during one search run,
/// together with its node. The states are indexed by value so that membership
/// in either the frontier (open nodes) or the explored set (closed nodes) is
/// a single hash lookup.
///
/// The node of a state is created exactly once, at its first discovery, so
/// the recorded parent is always the first discoverer.
#[derive(Debug)]
pub struct SearchSpace<S: State, T> {
    root_node_id: NodeId,
    nodes: SegVec<SearchNode<T>, Linear>,
    states: SegVec<S, Linear>,
    registered_states: HashMap<S, NodeId>,
    closed_nodes: usize,
}

impl<S: State, T: Clone> SearchSpace<S, T> {
    pub fn new(initial_state: S) -> Self {
        let mut nodes = SegVec::new();
        let mut states = SegVec::new();
        let mut registered_states = HashMap::new();

        let root_node_id = NodeId::new(0);
        registered_states.insert(initial_state.clone(), root_node_id);
        nodes.push(SearchNode::new_root(root_node_id));
        states.push(initial_state);

        Self {
            root_node_id,
            nodes,
            states,
            registered_states,
            closed_nodes: 0,
        }
    }

    /// Register `state` as discovered from `parent_id` through `transition`.
    /// Returns the id of the new open node, or `None` if the state has been
    /// seen before, in which case nothing changes.
    pub fn insert_if_new(&mut self, state: S, transition: T, parent_id: NodeId) -> Option<NodeId> {
        if self.registered_states.contains_key(&state) {
            return None;
        }
        let node_id = NodeId::new(self.nodes.len());
        let node = SearchNode::new_with_parent(node_id, self.get_node(parent_id), transition);
        self.registered_states.insert(state.clone(), node_id);
        self.nodes.push(node);
        self.states.push(state);
        Some(node_id)
    }

    /// Move an open node to the explored set.
    pub fn close(&mut self, node_id: NodeId) {
        self.get_node_mut(node_id).close();
        self.closed_nodes += 1;
    }

    /// Rebuild the path from the root to `goal_id` by following the parent
    /// chain backwards.
    pub fn extract_trace(&self, goal_id: NodeId) -> Trace<S, T> {
        let mut states = vec![];
        let mut transitions = vec![];
        let mut current_node = self.get_node(goal_id);
        states.push(self.get_state(goal_id).clone());
        while let Some(parent_id) = current_node.get_parent_id() {
            if let Some(transition) = current_node.get_transition() {
                transitions.push(transition.clone());
            }
            states.push(self.get_state(parent_id).clone());
            current_node = self.get_node(parent_id);
        }
        states.reverse();
        transitions.reverse();
        Trace::new(states, transitions)
    }

    #[inline(always)]
    pub fn get_root_node_id(&self) -> NodeId {
        self.root_node_id
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode<T> {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode<T> {
        self.nodes.get_mut(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_state(&self, node_id: NodeId) -> &S {
        self.states.get(node_id.id()).expect("Invalid node id")
    }

    /// Number of discovered states, open or closed.
    pub fn len(&self) -> usize {
        self.registered_states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered_states.is_empty()
    }

    /// Number of expanded states.
    pub fn closed_len(&self) -> usize {
        self.closed_nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchNodeStatus;

    #[test]
    fn duplicate_states_are_not_registered_twice() {
        let mut space: SearchSpace<u32, char> = SearchSpace::new(0);
        let root = space.get_root_node_id();
        let a = space.insert_if_new(1, 'a', root);
        assert!(a.is_some());
        assert_eq!(space.insert_if_new(1, 'b', root), None);
        assert_eq!(space.insert_if_new(0, 'c', root), None);
        assert_eq!(space.len(), 2);
    }

    #[test]
    fn first_discovery_wins() {
        let mut space: SearchSpace<u32, char> = SearchSpace::new(0);
        let root = space.get_root_node_id();
        let one = space.insert_if_new(1, 'a', root).unwrap();
        let two = space.insert_if_new(2, 'b', one).unwrap();
        // 2 rediscovered directly from the root: the longer first path stays.
        assert_eq!(space.insert_if_new(2, 'z', root), None);

        let trace = space.extract_trace(two);
        assert_eq!(trace.states(), &[0, 1, 2]);
        assert_eq!(trace.transitions(), &['a', 'b']);
        assert_eq!(space.get_node(two).get_depth(), 2);
    }

    #[test]
    fn trace_of_root_is_just_the_root() {
        let space: SearchSpace<u32, char> = SearchSpace::new(7);
        let trace = space.extract_trace(space.get_root_node_id());
        assert_eq!(trace.states(), &[7]);
        assert!(trace.transitions().is_empty());
    }

    #[test]
    fn closing_moves_state_to_explored() {
        let mut space: SearchSpace<u32, char> = SearchSpace::new(0);
        let root = space.get_root_node_id();
        assert_eq!(space.get_node(root).get_status(), SearchNodeStatus::Open);
        space.close(root);
        assert_eq!(space.get_node(root).get_status(), SearchNodeStatus::Closed);
        assert_eq!(space.closed_len(), 1);
        // A closed state is still known, so it is never admitted again.
        assert_eq!(space.insert_if_new(0, 'a', root), None);
    }
}
