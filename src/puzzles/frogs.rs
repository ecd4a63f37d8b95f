//! The leaping frogs puzzle. A row of stones holds green frogs on the left,
//! brown frogs on the right and a single empty stone in between. Green frogs
//! only move right and brown frogs only move left, either onto the adjacent
//! empty stone or by jumping over one frog onto it. The goal is to swap the
//! two groups.

use crate::search::{StateSpace, SuccessorGenerator, Transition};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frog {
    Empty,
    Green,
    Brown,
}

impl Frog {
    fn symbol(&self) -> char {
        match self {
            Frog::Empty => '_',
            Frog::Green => 'G',
            Frog::Brown => 'B',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stones(Vec<Frog>);

impl Stones {
    pub fn new(stones: Vec<Frog>) -> Self {
        Self(stones)
    }

    /// `frogs` green frogs, an empty stone, then `frogs` brown frogs.
    pub fn start(frogs: usize) -> Self {
        Self::arrangement(frogs, Frog::Green, Frog::Brown)
    }

    /// The start arrangement with both groups swapped.
    pub fn finish(frogs: usize) -> Self {
        Self::arrangement(frogs, Frog::Brown, Frog::Green)
    }

    fn arrangement(frogs: usize, left: Frog, right: Frog) -> Self {
        let mut stones = vec![left; frogs];
        stones.push(Frog::Empty);
        stones.extend(std::iter::repeat(right).take(frogs));
        Self(stones)
    }

    pub fn stones(&self) -> &[Frog] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn empty_stone(&self) -> Option<usize> {
        self.0.iter().position(|&frog| frog == Frog::Empty)
    }
}

impl Display for Stones {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().map(Frog::symbol).join(""))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected character {found:?} at position {position}, expected one of 'G', 'B', '_'")]
pub struct ParseStonesError {
    position: usize,
    found: char,
}

impl FromStr for Stones {
    type Err = ParseStonesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, c)| match c {
                'G' => Ok(Frog::Green),
                'B' => Ok(Frog::Brown),
                '_' => Ok(Frog::Empty),
                found => Err(ParseStonesError { position, found }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Stones)
    }
}

/// Move the frog on stone `from` onto the empty stone `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leap {
    pub from: usize,
    pub to: usize,
}

impl Transition<Stones> for Leap {
    fn apply(&self, state: &mut Stones) {
        state.0[self.to] = state.0[self.from];
        state.0[self.from] = Frog::Empty;
    }
}

/// Lists leaps into the empty stone: green step, green jump, brown step,
/// brown jump, in that order.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeapingFrogs;

impl SuccessorGenerator<Stones> for LeapingFrogs {
    type Transition = Leap;

    fn transitions(&self, state: &Stones) -> Vec<Leap> {
        let stones = state.stones();
        if stones.len() < 2 {
            return vec![];
        }
        let Some(to) = state.empty_stone() else {
            return vec![];
        };

        let mut leaps = Vec::with_capacity(4);
        for distance in [1, 2] {
            if to >= distance && stones[to - distance] == Frog::Green {
                leaps.push(Leap {
                    from: to - distance,
                    to,
                });
            }
        }
        for distance in [1, 2] {
            if to + distance < stones.len() && stones[to + distance] == Frog::Brown {
                leaps.push(Leap {
                    from: to + distance,
                    to,
                });
            }
        }
        leaps
    }
}

/// The puzzle with `frogs` frogs on each side.
pub fn state_space(frogs: usize) -> StateSpace<Stones, LeapingFrogs> {
    StateSpace::new(Stones::start(frogs), LeapingFrogs)
}

/// Render every sequence of leaps from `state` as an indented tree, walking it
/// with an explicit stack. The output grows with the number of paths.
pub fn successor_tree(state: &Stones) -> String {
    let mut out = String::new();
    let mut stack = vec![(state.clone(), 0usize)];
    while let Some((state, level)) = stack.pop() {
        let successors = LeapingFrogs.successors(&state);
        out.push_str(&format!(
            "{}state {} has {} transitions",
            "  ".repeat(level),
            state,
            successors.len()
        ));
        out.push_str(if successors.is_empty() {
            "\n"
        } else {
            ", leading to:\n"
        });
        stack.extend(
            successors
                .into_iter()
                .rev()
                .map(|(_, successor)| (successor, level + 1)),
        );
    }
    out
}
