use crate::search::Transition;

/// A successor generator is responsible for listing the moves applicable to a
/// given state.
///
/// The order of the returned moves matters: it decides which predecessor is
/// recorded first when several moves discover states in the same step, and it
/// drives the exploration order of depth-first search. Implementations must
/// terminate and must not depend on anything but `state`.
pub trait SuccessorGenerator<S> {
    type Transition: Transition<S>;

    fn transitions(&self, state: &S) -> Vec<Self::Transition>;

    /// Apply every applicable move to an independent copy of `state`.
    fn successors(&self, state: &S) -> Vec<(Self::Transition, S)>
    where
        S: Clone,
    {
        self.transitions(state)
            .into_iter()
            .map(|transition| {
                let successor = transition.successor(state);
                (transition, successor)
            })
            .collect()
    }
}
