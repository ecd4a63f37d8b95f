use std::fmt::Debug;
use std::hash::Hash;

/// A configuration of the modelled problem. The engine only ever copies
/// states and compares them, so any value type with consistent equality and
/// hashing qualifies.
///
/// Clients must keep `Eq` and `Hash` consistent with each other. The engine
/// does not detect violations; an inconsistent pair makes deduplication (and
/// therefore termination on cyclic graphs) unreliable.
pub trait State: Clone + Eq + Hash + Debug {}

impl<T> State for T where T: Clone + Eq + Hash + Debug {}
