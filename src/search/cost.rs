use ordered_float::OrderedFloat;
use std::fmt::Debug;

/// A cost accumulated during cost-guided search. Costs must be totally
/// ordered; floating point costs should go through [`FloatCost`].
pub trait Cost: Ord + Clone + Debug {}

impl<T> Cost for T where T: Ord + Clone + Debug {}

/// Real-valued cost with a total order (NaN compares greater than everything).
pub type FloatCost = OrderedFloat<f64>;

/// Computes the cost of a frontier state given the cost of the previously
/// selected state.
pub trait CostFunction<S, C> {
    fn cost(&self, state: &S, previous: &C) -> C;
}

/// Gives every state the same cost, `C::default()`. With this function
/// cost-guided search degenerates to first-in first-out order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroCost;

impl<S, C: Default> CostFunction<S, C> for ZeroCost {
    fn cost(&self, _state: &S, _previous: &C) -> C {
        C::default()
    }
}

impl<S, C, F> CostFunction<S, C> for F
where
    F: Fn(&S, &C) -> C,
{
    fn cost(&self, state: &S, previous: &C) -> C {
        self(state, previous)
    }
}
