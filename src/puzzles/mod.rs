//! Puzzle models solved with the reachability engine.

pub mod crossing;
pub mod family;
pub mod frogs;
