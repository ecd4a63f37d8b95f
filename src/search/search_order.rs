use serde::{Deserialize, Serialize};

/// The order in which frontier states are selected for expansion.
#[derive(
    clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SearchOrder {
    /// Last admitted state first. Finds a path, not necessarily a short one.
    #[clap(name = "dfs")]
    DepthFirst,
    /// First admitted state first. Finds a path with the fewest transitions.
    #[default]
    #[clap(name = "bfs")]
    BreadthFirst,
    /// The frontier state of minimum cost first, where costs are computed
    /// against the cost of the previously selected state.
    CostGuided,
}

impl SearchOrder {
    pub fn name(&self) -> &'static str {
        match self {
            SearchOrder::DepthFirst => "depth-first",
            SearchOrder::BreadthFirst => "breadth-first",
            SearchOrder::CostGuided => "cost-guided",
        }
    }
}
