//! A transition is a named, applicable move from one state to another. Moves
//! are plain data ("move actor i to position p") rather than captured
//! closures, so a solution trace can be inspected, compared and serialised.
//! Equality lets a recorded move be checked against the moves a generator
//! emits.

use std::fmt::Debug;

pub trait Transition<S>: Clone + Debug + PartialEq {
    /// Apply the move to `state` in place. The engine always passes a fresh
    /// copy of the source state, never a state it is still holding.
    fn apply(&self, state: &mut S);

    /// Return the successor of `state` under this move.
    fn successor(&self, state: &S) -> S
    where
        S: Clone,
    {
        let mut successor = state.clone();
        self.apply(&mut successor);
        successor
    }
}
