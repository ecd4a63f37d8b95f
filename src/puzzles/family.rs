//! Japanese family river crossing: a mother, a father, two daughters, two
//! sons, a policeman and a prisoner cross a river in a boat for two.
//!
//! Only the parents and the policeman can operate the boat, the prisoner may
//! not be with any family member unless the policeman is there, the father
//! may not be with a daughter without the mother and the mother may not be
//! with a son without the father.

use crate::search::{
    CostFunction, Invariant, StateSpace, SuccessorGenerator, Transition, Violation,
};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumCountMacro,
)]
pub enum Person {
    Mother,
    Father,
    Daughter1,
    Daughter2,
    Son1,
    Son2,
    Policeman,
    Prisoner,
}

const CHILDREN: [Person; 4] = [
    Person::Daughter1,
    Person::Daughter2,
    Person::Son1,
    Person::Son2,
];

const FAMILY: [Person; 6] = [
    Person::Daughter1,
    Person::Daughter2,
    Person::Son1,
    Person::Son2,
    Person::Mother,
    Person::Father,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shore {
    Shore1,
    Shore2,
}

/// Where a person is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Place {
    #[default]
    Shore1,
    Onboard,
    Shore2,
}

impl From<Shore> for Place {
    fn from(shore: Shore) -> Self {
        match shore {
            Shore::Shore1 => Place::Shore1,
            Shore::Shore2 => Place::Shore2,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoatPosition {
    #[default]
    Shore1,
    Travel,
    Shore2,
}

impl BoatPosition {
    pub fn shore(&self) -> Option<Shore> {
        match self {
            BoatPosition::Shore1 => Some(Shore::Shore1),
            BoatPosition::Travel => None,
            BoatPosition::Shore2 => Some(Shore::Shore2),
        }
    }
}

impl From<Shore> for BoatPosition {
    fn from(shore: Shore) -> Self {
        match shore {
            Shore::Shore1 => BoatPosition::Shore1,
            Shore::Shore2 => BoatPosition::Shore2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Boat {
    pub position: BoatPosition,
    pub capacity: u16,
    pub passengers: u16,
}

impl Default for Boat {
    fn default() -> Self {
        Self {
            position: BoatPosition::Shore1,
            capacity: 2,
            passengers: 0,
        }
    }
}

impl Boat {
    /// The shore the boat is moored at, if any.
    pub fn shore(&self) -> Option<Shore> {
        self.position.shore()
    }
}

impl Display for Boat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let position = match self.position {
            BoatPosition::Shore1 => "sh1",
            BoatPosition::Travel => "trv",
            BoatPosition::Shore2 => "sh2",
        };
        write!(f, "{{{},{},{}}}", position, self.passengers, self.capacity)
    }
}

/// The boat and everybody's place, initially all on the first shore.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Family {
    pub boat: Boat,
    places: [Place; Person::COUNT],
}

impl Family {
    pub fn place(&self, person: Person) -> Place {
        self.places[person as usize]
    }

    fn set_place(&mut self, person: Person, place: Place) {
        self.places[person as usize] = place;
    }

    pub fn is_travelling(&self) -> bool {
        self.boat.position == BoatPosition::Travel
    }

    fn onboard(&self, person: Person) -> bool {
        self.place(person) == Place::Onboard
    }

    pub fn all_across(&self) -> bool {
        self.places.iter().all(|&place| place == Place::Shore2)
    }

    /// Column titles matching the [`Display`] output.
    pub fn header() -> &'static str {
        "Boat,     Mothr,Fathr,Daug1,Daug2,Son1, Son2, Polic,Prisn"
    }
}

impl Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.boat)?;
        for place in self.places {
            let place = match place {
                Place::Shore1 => "{sh1}",
                Place::Onboard => "{~~~}",
                Place::Shore2 => "{SH2}",
            };
            write!(f, ",{}", place)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    Depart,
    /// Land and unload everybody onboard.
    Arrive(Shore),
    Board(Person),
    Disembark(Person),
}

impl Transition<Family> for Move {
    fn apply(&self, state: &mut Family) {
        match *self {
            Move::Depart => state.boat.position = BoatPosition::Travel,
            Move::Arrive(shore) => {
                state.boat.position = shore.into();
                state.boat.passengers = 0;
                for place in state.places.iter_mut() {
                    if *place == Place::Onboard {
                        *place = shore.into();
                    }
                }
            }
            Move::Board(person) => {
                state.set_place(person, Place::Onboard);
                state.boat.passengers += 1;
            }
            Move::Disembark(person) => {
                if let Some(shore) = state.boat.position.shore() {
                    state.set_place(person, shore.into());
                    state.boat.passengers -= 1;
                }
            }
        }
    }
}

/// Boat moves first, then boarding and disembarking in [`Person`] order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FamilyCrossing;

impl SuccessorGenerator<Family> for FamilyCrossing {
    type Transition = Move;

    fn transitions(&self, state: &Family) -> Vec<Move> {
        let mut moves = vec![];
        match state.boat.shore() {
            Some(_) if state.boat.passengers > 0 => moves.push(Move::Depart),
            Some(_) => {}
            None => {
                moves.push(Move::Arrive(Shore::Shore1));
                moves.push(Move::Arrive(Shore::Shore2));
            }
        }
        let Some(shore) = state.boat.shore() else {
            return moves;
        };
        for person in Person::iter() {
            match state.place(person) {
                Place::Onboard => moves.push(Move::Disembark(person)),
                place if place == Place::from(shore) => moves.push(Move::Board(person)),
                _ => {}
            }
        }
        moves
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FamilyRules;

impl FamilyRules {
    fn child_reason(child: Person) -> &'static str {
        match child {
            Person::Daughter1 => "d1 travel alone",
            Person::Daughter2 => "d2 travel alone",
            Person::Son1 => "s1 travel alone",
            _ => "s2 travel alone",
        }
    }

    fn check_travel(state: &Family) -> Result<(), Violation> {
        // Only the first child onboard is checked, the others are covered by it.
        if let Some(&child) = CHILDREN.iter().find(|&&child| state.onboard(child)) {
            let accompanied_badly = CHILDREN
                .iter()
                .chain(std::iter::once(&Person::Prisoner))
                .any(|&other| other != child && state.onboard(other));
            if state.boat.passengers == 1 || accompanied_badly {
                return Err(Violation::new(Self::child_reason(child)));
            }
        }

        let prisoner = state.place(Person::Prisoner);
        if prisoner != state.place(Person::Policeman)
            && FAMILY.iter().any(|&member| state.place(member) == prisoner)
        {
            return Err(Violation::new("pr with family"));
        }

        if prisoner == Place::Onboard && state.boat.passengers < 2 {
            return Err(Violation::new("pr on boat"));
        }
        Ok(())
    }

    fn check_parents(state: &Family) -> Result<(), Violation> {
        let with = |a, b| state.place(a) == state.place(b);
        let rules = [
            (Person::Daughter1, Person::Father, Person::Mother, "d1 with f"),
            (Person::Daughter2, Person::Father, Person::Mother, "d2 with f"),
            (Person::Son1, Person::Mother, Person::Father, "s1 with m"),
            (Person::Son2, Person::Mother, Person::Father, "s2 with m"),
        ];
        for (child, parent, guardian, reason) in rules {
            if with(child, parent) && !with(child, guardian) {
                return Err(Violation::new(reason));
            }
        }
        Ok(())
    }
}

impl Invariant<Family> for FamilyRules {
    fn check(&self, state: &Family) -> Result<(), Violation> {
        if state.boat.passengers > state.boat.capacity {
            return Err(Violation::new("boat overload"));
        }
        if state.is_travelling() {
            Self::check_travel(state)?;
        }
        Self::check_parents(state)
    }
}

/// Ordered by depth first, then by noise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Cost {
    pub depth: usize,
    /// Children left on the first shore get bored and make noise.
    pub noise: usize,
}

/// Which solution the cost-guided search should prefer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[clap(rename_all = "kebab-case")]
pub enum CostPreference {
    /// Fewest steps; the daughters tend to cross first.
    #[default]
    Depth,
    /// The first son makes more noise, so he is taken across first.
    Son1First,
    /// The second son makes more noise, so he is taken across first.
    Son2First,
}

impl CostPreference {
    fn noise_weights(&self) -> (usize, usize) {
        match self {
            CostPreference::Depth => (0, 0),
            CostPreference::Son1First => (2, 1),
            CostPreference::Son2First => (1, 2),
        }
    }
}

impl CostFunction<Family, Cost> for CostPreference {
    fn cost(&self, state: &Family, previous: &Cost) -> Cost {
        if *self == CostPreference::Depth {
            return Cost {
                depth: previous.depth + 1,
                noise: previous.noise,
            };
        }
        let (son1, son2) = self.noise_weights();
        let mut noise = previous.noise;
        if state.place(Person::Son1) == Place::Shore1 {
            noise += son1;
        }
        if state.place(Person::Son2) == Place::Shore1 {
            noise += son2;
        }
        Cost {
            depth: previous.depth,
            noise,
        }
    }
}

pub fn state_space(preference: CostPreference) -> StateSpace<Family, FamilyCrossing, Cost> {
    StateSpace::new(Family::default(), FamilyCrossing)
        .with_invariant(FamilyRules)
        .with_cost(Cost::default(), preference)
}

pub fn goal(state: &Family) -> bool {
    state.all_across()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{SearchOrder, Silent, Trace};
    use crate::test_utils::*;

    fn solve(preference: CostPreference, order: SearchOrder) -> Trace<Family, Move> {
        let space = state_space(preference).with_diagnostics(Silent);
        let trace = space.check(goal, order).unwrap();
        assert_trace_valid(&space, &trace, goal);
        trace
    }

    fn first_across(trace: &[Family], person: Person) -> Option<usize> {
        trace.iter().position(|s| s.place(person) == Place::Shore2)
    }

    fn travelling(trace: &[Family]) -> usize {
        trace.iter().filter(|s| s.is_travelling()).count()
    }

    fn family(boat: BoatPosition, passengers: u16, places: [Place; Person::COUNT]) -> Family {
        Family {
            boat: Boat {
                position: boat,
                passengers,
                ..Boat::default()
            },
            places,
        }
    }

    #[test]
    fn empty_boat_cannot_depart() {
        let moves = FamilyCrossing.transitions(&Family::default());
        assert_eq!(moves, Person::iter().map(Move::Board).collect::<Vec<_>>());
    }

    #[test]
    fn arriving_unloads_passengers() {
        use Place::*;
        let state = family(
            BoatPosition::Travel,
            2,
            [Shore1, Shore1, Shore1, Shore1, Shore1, Shore1, Onboard, Onboard],
        );
        let moves = FamilyCrossing.transitions(&state);
        assert_eq!(
            moves,
            vec![Move::Arrive(Shore::Shore1), Move::Arrive(Shore::Shore2)]
        );
        let landed = moves[1].successor(&state);
        assert_eq!(landed.boat.position, BoatPosition::Shore2);
        assert_eq!(landed.boat.passengers, 0);
        assert_eq!(landed.place(Person::Prisoner), Shore2);
        assert_eq!(
            landed.to_string(),
            "{sh2,0,2},{sh1},{sh1},{sh1},{sh1},{sh1},{sh1},{SH2},{SH2}"
        );
    }

    #[test]
    fn boarding_and_disembarking_on_the_boat_shore() {
        use Place::*;
        let state = family(
            BoatPosition::Shore2,
            1,
            [Shore1, Shore2, Shore1, Shore1, Shore1, Shore1, Onboard, Shore1],
        );
        assert_eq!(
            FamilyCrossing.transitions(&state),
            vec![
                Move::Depart,
                Move::Board(Person::Father),
                Move::Disembark(Person::Policeman)
            ]
        );
        let ashore = Move::Disembark(Person::Policeman).successor(&state);
        assert_eq!(ashore.place(Person::Policeman), Shore2);
        assert_eq!(ashore.boat.passengers, 0);
    }

    #[test]
    fn invariant_reasons() {
        use Place::*;
        let reason = |state: Family| FamilyRules.check(&state).err().map(|v| v.to_string());
        let ashore = [Shore1; Person::COUNT];
        assert_eq!(reason(family(BoatPosition::Shore1, 0, ashore)), None);
        assert_eq!(
            reason(family(BoatPosition::Shore1, 3, ashore)),
            Some("boat overload".to_string())
        );

        let mut places = ashore;
        places[Person::Daughter1 as usize] = Onboard;
        assert_eq!(
            reason(family(BoatPosition::Travel, 1, places)),
            Some("d1 travel alone".to_string())
        );
        places[Person::Mother as usize] = Onboard;
        places[Person::Daughter2 as usize] = Shore2;
        assert_eq!(reason(family(BoatPosition::Travel, 2, places)), None);

        let mut places = ashore;
        places[Person::Son2 as usize] = Onboard;
        places[Person::Prisoner as usize] = Onboard;
        assert_eq!(
            reason(family(BoatPosition::Travel, 2, places)),
            Some("s2 travel alone".to_string())
        );

        let mut places = ashore;
        places[Person::Policeman as usize] = Onboard;
        assert_eq!(
            reason(family(BoatPosition::Travel, 1, places)),
            Some("pr with family".to_string())
        );

        let mut places = [Shore2; Person::COUNT];
        places[Person::Prisoner as usize] = Onboard;
        places[Person::Policeman as usize] = Onboard;
        assert_eq!(reason(family(BoatPosition::Travel, 2, places)), None);
        places[Person::Policeman as usize] = Shore2;
        assert_eq!(
            reason(family(BoatPosition::Travel, 1, places)),
            Some("pr on boat".to_string())
        );

        let mut places = ashore;
        places[Person::Mother as usize] = Shore2;
        assert_eq!(
            reason(family(BoatPosition::Shore1, 0, places)),
            Some("d1 with f".to_string())
        );
        let mut places = ashore;
        places[Person::Father as usize] = Shore2;
        assert_eq!(
            reason(family(BoatPosition::Shore1, 0, places)),
            Some("s1 with m".to_string())
        );
    }

    #[test]
    fn cost_presets() {
        let previous = Cost { depth: 3, noise: 5 };
        let start = Family::default();
        assert_eq!(
            CostPreference::Depth.cost(&start, &previous),
            Cost { depth: 4, noise: 5 }
        );
        assert_eq!(
            CostPreference::Son1First.cost(&start, &previous),
            Cost { depth: 3, noise: 8 }
        );
        assert!(Cost { depth: 1, noise: 9 } < Cost { depth: 2, noise: 0 });
    }

    #[test]
    fn depth_cost_takes_a_daughter_first() {
        let trace = solve(CostPreference::Depth, SearchOrder::CostGuided);
        assert_eq!(trace.len(), 63);
        assert_eq!(travelling(&trace), 17);
        assert_eq!(first_across(&trace, Person::Daughter1), Some(11));
        assert_eq!(first_across(&trace, Person::Son1), Some(47));
    }

    #[test]
    fn noise_decides_which_son_crosses_first() {
        let son1_first = solve(CostPreference::Son1First, SearchOrder::CostGuided);
        let son2_first = solve(CostPreference::Son2First, SearchOrder::CostGuided);

        let son1 = first_across(&son1_first, Person::Son1).unwrap();
        let son2 = first_across(&son2_first, Person::Son2).unwrap();
        assert_eq!((son1, son2), (11, 11));
        assert!(son1 < first_across(&son2_first, Person::Son1).unwrap());
        assert!(son2 < first_across(&son1_first, Person::Son2).unwrap());
    }

    #[test]
    fn uninformed_orders_also_solve() {
        for order in [SearchOrder::BreadthFirst, SearchOrder::DepthFirst] {
            let trace = solve(CostPreference::Depth, order);
            assert_eq!(trace.len(), 63);
            assert!(trace.goal().is_some_and(goal));
        }
    }
}
