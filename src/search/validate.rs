use crate::search::{Cost, State, StateSpace, SuccessorGenerator, Trace, TraceError, Transition};

/// Check that `trace` is a solution of `space` for `goal`: it starts at the
/// initial state, each recorded transition is one the generator emits for its
/// source state and yields the next state, every state after the first
/// satisfies the invariant and the last one is a goal.
pub fn validate<S, G, C>(
    space: &StateSpace<S, G, C>,
    trace: &Trace<S, G::Transition>,
    goal: impl Fn(&S) -> bool,
) -> Result<(), TraceError>
where
    S: State,
    G: SuccessorGenerator<S>,
    C: Cost,
{
    let states = trace.states();
    let (first, last) = match (states.first(), states.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(TraceError::Empty),
    };
    if first != space.initial_state() {
        return Err(TraceError::WrongInitialState {
            expected: format!("{:?}", space.initial_state()),
            found: format!("{:?}", first),
        });
    }

    for (step, (transition, next)) in trace.steps().enumerate() {
        let current = &states[step];
        if transition.successor(current) != *next {
            return Err(TraceError::WrongSuccessor {
                step,
                transition: format!("{:?}", transition),
                state: format!("{:?}", next),
            });
        }

        let applicable = space
            .successor_generator()
            .transitions(current)
            .contains(transition);
        if !applicable {
            return Err(TraceError::NotApplicable {
                step,
                transition: format!("{:?}", transition),
                state: format!("{:?}", current),
            });
        }

        if let Err(violation) = space.invariant().check(next) {
            return Err(TraceError::InvariantViolated {
                step,
                state: format!("{:?}", next),
                reason: violation.to_string(),
            });
        }
    }

    if !goal(last) {
        return Err(TraceError::GoalNotReached {
            state: format!("{:?}", last),
        });
    }

    Ok(())
}
