use crate::search::SearchOrder;
use std::time::{Duration, Instant};
use tracing::info;

const LOG_INTERVAL: Duration = Duration::from_secs(10);

#[derive(Debug)]
pub struct SearchStatistics {
    /// Order the search was run with
    order: SearchOrder,
    /// Number of states expanded
    expanded_nodes: usize,
    /// Number of unique states admitted to the frontier
    generated_nodes: usize,
    /// Number of candidates rejected by the invariant
    pruned_nodes: usize,
    /// Number of candidates already in the frontier or explored set
    duplicate_nodes: usize,
    /// Number of transitions produced by the successor generator
    generated_transitions: usize,
    /// Largest frontier size seen
    peak_frontier_size: usize,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
    /// Set once the search has finished
    search_duration: Option<Duration>,
}

impl SearchStatistics {
    pub fn new(order: SearchOrder) -> Self {
        info!(order = order.name(), "starting search");
        Self {
            order,
            expanded_nodes: 0,
            generated_nodes: 0,
            pruned_nodes: 0,
            duplicate_nodes: 0,
            generated_transitions: 0,
            peak_frontier_size: 0,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
            search_duration: None,
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self) {
        self.generated_nodes += 1;
    }

    pub fn increment_pruned_nodes(&mut self) {
        self.pruned_nodes += 1;
    }

    pub fn increment_duplicate_nodes(&mut self) {
        self.duplicate_nodes += 1;
    }

    pub fn increment_generated_transitions(&mut self, num_transitions: usize) {
        self.generated_transitions += num_transitions;
    }

    pub fn register_frontier_size(&mut self, size: usize) {
        self.peak_frontier_size = self.peak_frontier_size.max(size);
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() >= LOG_INTERVAL {
            self.log();
        }
    }

    pub fn log(&mut self) {
        self.last_log_time = Instant::now();
        info!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            pruned_nodes = self.pruned_nodes,
            duplicate_nodes = self.duplicate_nodes,
            generated_transitions = self.generated_transitions,
            peak_frontier_size = self.peak_frontier_size,
        );
    }

    pub fn finalise_search(&mut self) {
        info!("finalising search");
        self.log();
        let duration = self.search_start_time.elapsed();
        self.search_duration = Some(duration);
        info!(
            order = self.order.name(),
            search_duration = duration.as_secs_f64()
        );
    }

    pub fn order(&self) -> SearchOrder {
        self.order
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    pub fn pruned_nodes(&self) -> usize {
        self.pruned_nodes
    }

    pub fn duplicate_nodes(&self) -> usize {
        self.duplicate_nodes
    }

    pub fn generated_transitions(&self) -> usize {
        self.generated_transitions
    }

    pub fn peak_frontier_size(&self) -> usize {
        self.peak_frontier_size
    }

    /// Wall-clock duration of the search, or the time elapsed so far if it
    /// has not been finalised.
    pub fn search_duration(&self) -> Duration {
        self.search_duration
            .unwrap_or_else(|| self.search_start_time.elapsed())
    }
}
