//! Goat, cabbage and wolf crossing a river. Only one actor can be travelling
//! at a time, and the goat may not be left with something it eats or
//! something that eats it.

use crate::search::{Invariant, StateSpace, SuccessorGenerator, Transition, Violation};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumCountMacro,
)]
pub enum Actor {
    Cabbage,
    Goat,
    Wolf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[default]
    Shore1,
    Travel,
    Shore2,
}

impl Position {
    fn symbol(&self) -> char {
        match self {
            Position::Shore1 => '1',
            Position::Travel => '~',
            Position::Shore2 => '2',
        }
    }
}

/// Positions indexed by [`Actor`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Actors([Position; Actor::COUNT]);

impl Actors {
    pub fn new(positions: [Position; Actor::COUNT]) -> Self {
        Self(positions)
    }

    pub fn position(&self, actor: Actor) -> Position {
        self.0[actor as usize]
    }

    pub fn travelling(&self) -> usize {
        self.0.iter().filter(|&&p| p == Position::Travel).count()
    }

    pub fn all_across(&self) -> bool {
        self.0.iter().all(|&p| p == Position::Shore2)
    }
}

impl Display for Actors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|p| write!(f, "{}", p.symbol()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ferry {
    pub actor: Actor,
    pub to: Position,
}

impl Transition<Actors> for Ferry {
    fn apply(&self, state: &mut Actors) {
        state.0[self.actor as usize] = self.to;
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RiverCrossing;

impl SuccessorGenerator<Actors> for RiverCrossing {
    type Transition = Ferry;

    fn transitions(&self, state: &Actors) -> Vec<Ferry> {
        let mut ferries = vec![];
        for actor in Actor::iter() {
            match state.position(actor) {
                Position::Shore1 | Position::Shore2 => ferries.push(Ferry {
                    actor,
                    to: Position::Travel,
                }),
                Position::Travel => {
                    ferries.push(Ferry {
                        actor,
                        to: Position::Shore1,
                    });
                    ferries.push(Ferry {
                        actor,
                        to: Position::Shore2,
                    });
                }
            }
        }
        ferries
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NobodyGetsEaten;

impl Invariant<Actors> for NobodyGetsEaten {
    fn check(&self, state: &Actors) -> Result<(), Violation> {
        if state.travelling() > 1 {
            return Err(Violation::new("more than one passenger"));
        }
        let goat = state.position(Actor::Goat);
        if goat == state.position(Actor::Wolf) && state.position(Actor::Cabbage) == Position::Travel
        {
            return Err(Violation::new("goat left with wolf"));
        }
        if goat == state.position(Actor::Cabbage) && state.position(Actor::Wolf) == Position::Travel
        {
            return Err(Violation::new("goat left with cabbage"));
        }
        Ok(())
    }
}

/// Everybody on the first shore, with the river-crossing rules in force.
pub fn state_space() -> StateSpace<Actors, RiverCrossing> {
    StateSpace::new(Actors::default(), RiverCrossing).with_invariant(NobodyGetsEaten)
}

pub fn goal(state: &Actors) -> bool {
    state.all_across()
}
