use crate::search::SearchError;
use memory_stats::memory_stats;
use std::time::{Duration, Instant};
use tracing::info;

const MEMORY_SAMPLE_INTERVAL: Duration = Duration::from_secs(1);
const LOG_INTERVAL: Duration = Duration::from_secs(10);

/// Resource limits for one search run. Both are off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    pub time_limit: Option<Duration>,
    pub memory_limit_mb: Option<usize>,
}

impl SearchLimits {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    pub fn with_memory_limit_mb(mut self, memory_limit_mb: usize) -> Self {
        self.memory_limit_mb = Some(memory_limit_mb);
        self
    }
}

#[derive(Debug)]
pub struct TerminationCondition {
    limits: SearchLimits,
    start_time: Instant,
    peak_memory_usage_mb: Option<usize>,
    last_sample_time: Option<Instant>,
    last_log_time: Instant,
}

impl TerminationCondition {
    pub fn new(limits: SearchLimits) -> Self {
        if limits != SearchLimits::unlimited() {
            info!(
                time_limit = limits.time_limit.map(|d| d.as_secs_f64()),
                memory_limit_mb = limits.memory_limit_mb,
            );
        }
        Self {
            limits,
            start_time: Instant::now(),
            peak_memory_usage_mb: None,
            last_sample_time: None,
            last_log_time: Instant::now(),
        }
    }

    fn sample_memory_if_needed(&mut self) {
        let due = self
            .last_sample_time
            .map_or(true, |time| time.elapsed() >= MEMORY_SAMPLE_INTERVAL);
        if !due {
            return;
        }
        self.last_sample_time = Some(Instant::now());
        let memory_usage = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
        self.peak_memory_usage_mb = self.peak_memory_usage_mb.max(memory_usage);
        if self.last_log_time.elapsed() >= LOG_INTERVAL {
            self.last_log_time = Instant::now();
            info!(
                memory_usage_mb = memory_usage,
                time_elapsed = self.start_time.elapsed().as_secs_f64(),
            );
        }
    }

    pub fn finalise(&self) {
        info!(
            peak_recorded_memory_usage_mb = self.peak_memory_usage_mb,
            total_time_used = self.start_time.elapsed().as_secs_f64(),
        );
    }

    /// Returns the error to abort with if a limit has been reached. Memory is
    /// sampled whether or not it is limited, so progress logs and the final
    /// peak are reported for every run.
    pub fn should_terminate(&mut self) -> Option<SearchError> {
        if let Some(limit) = self.limits.time_limit {
            if self.start_time.elapsed() >= limit {
                return Some(SearchError::TimeLimitExceeded { limit });
            }
        }
        self.sample_memory_if_needed();
        if let Some(limit_mb) = self.limits.memory_limit_mb {
            if let Some(peak_usage) = self.peak_memory_usage_mb {
                if peak_usage > limit_mb {
                    return Some(SearchError::MemoryLimitExceeded { limit_mb });
                }
            }
        }
        None
    }
}
