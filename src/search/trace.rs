//! A trace is the solution of a search: the states visited from the initial
//! state to a goal state, and the transitions taken between them.

use serde::Serialize;
use std::ops::Deref;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trace<S, T> {
    states: Vec<S>,
    transitions: Vec<T>,
}

impl<S, T> Trace<S, T> {
    pub(crate) fn new(states: Vec<S>, transitions: Vec<T>) -> Self {
        debug_assert!(
            states.is_empty() || states.len() == transitions.len() + 1,
            "A trace has one transition between each pair of states"
        );
        Self {
            states,
            transitions,
        }
    }

    pub fn states(&self) -> &[S] {
        &self.states
    }

    pub fn transitions(&self) -> &[T] {
        &self.transitions
    }

    pub fn initial(&self) -> Option<&S> {
        self.states.first()
    }

    pub fn goal(&self) -> Option<&S> {
        self.states.last()
    }

    /// Each transition together with the state it leads to.
    pub fn steps(&self) -> impl Iterator<Item = (&T, &S)> {
        self.transitions.iter().zip(self.states.iter().skip(1))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error>
    where
        S: Serialize,
        T: Serialize,
    {
        serde_json::to_string_pretty(self)
    }
}

impl<S, T> Deref for Trace<S, T> {
    type Target = [S];

    fn deref(&self) -> &Self::Target {
        &self.states
    }
}

impl<S, T> IntoIterator for Trace<S, T> {
    type Item = S;
    type IntoIter = std::vec::IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_pair_transitions_with_targets() {
        let trace = Trace::new(vec![1, 2, 4], vec!["double", "double"]);
        let steps: Vec<_> = trace.steps().collect();
        assert_eq!(steps, vec![(&"double", &2), (&"double", &4)]);
        assert_eq!(trace.initial(), Some(&1));
        assert_eq!(trace.goal(), Some(&4));
        assert_eq!(trace.len(), 3);
    }

    #[test]
    fn serialises_states_and_transitions() {
        let trace = Trace::new(vec![1, 2], vec!["inc"]);
        let json: serde_json::Value = serde_json::from_str(&trace.to_json().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "states": [1, 2], "transitions": ["inc"] })
        );
    }
}
