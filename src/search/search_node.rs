/// Index of a node (and of its state) inside one [`SearchSpace`].
///
/// [`SearchSpace`]: crate::search::SearchSpace
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline(always)]
    pub fn id(&self) -> usize {
        self.0
    }
}

/// The status of a search node. A state is in exactly one of the two: it
/// enters the frontier when discovered and is closed when expanded, never to
/// be reopened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// Node is in the frontier
    Open,
    /// Node has been expanded
    Closed,
}

/// A [`SearchNode`] holds the search-specific information about a state: its
/// status and how it was first discovered.
#[derive(Debug, Clone)]
pub struct SearchNode<T> {
    node_id: NodeId,
    status: SearchNodeStatus,
    /// Node that discovered this one. `None` only for the root.
    parent_id: Option<NodeId>,
    /// Transition from the parent that produced this node
    transition: Option<T>,
    /// Number of transitions from the root along the parent chain
    depth: usize,
}

impl<T> SearchNode<T> {
    /// Create the root node. It is open from the start and has no parent.
    pub fn new_root(node_id: NodeId) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::Open,
            parent_id: None,
            transition: None,
            depth: 0,
        }
    }

    /// Create an open node discovered from `parent` through `transition`.
    pub fn new_with_parent(node_id: NodeId, parent: &SearchNode<T>, transition: T) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::Open,
            parent_id: Some(parent.node_id),
            transition: Some(transition),
            depth: parent.depth + 1,
        }
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    pub fn get_status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn get_parent_id(&self) -> Option<NodeId> {
        self.parent_id
    }

    pub fn get_transition(&self) -> Option<&T> {
        self.transition.as_ref()
    }

    pub fn get_depth(&self) -> usize {
        self.depth
    }
}
