use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Default)]
pub struct GenerationMetrics {
    pub total_generations: u64,
    pub failed_generations: u64,
    pub total_nodes: u64,
    pub latencies: VecDeque<u64>, // microseconds
}

#[derive(Clone)]
pub struct MetricsCollector {
    state: Arc<Mutex<MetricsState>>,
}

struct MetricsState {
    generation: GenerationMetrics,
    max_history: usize,
}

impl MetricsCollector {
    pub fn new(max_history: usize) -> Self {
        Self {
            state: Arc::new(Mutex::new(MetricsState {
                generation: GenerationMetrics::default(),
                max_history,
            })),
        }
    }

    pub fn record_success(&self, latency_us: u64, node_count: usize) {
        let mut state = self.lock();
        state.generation.total_generations += 1;
        state.generation.total_nodes += node_count as u64;
        push_latency(&mut state, latency_us);
    }

    pub fn record_failure(&self, latency_us: u64) {
        let mut state = self.lock();
        state.generation.total_generations += 1;
        state.generation.failed_generations += 1;
        push_latency(&mut state, latency_us);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let state = self.lock();
        let g = &state.generation;

        let mut sorted_latencies: Vec<u64> = g.latencies.iter().copied().collect();
        sorted_latencies.sort_unstable();

        let succeeded = g.total_generations - g.failed_generations;
        let avg_node_count = if succeeded > 0 {
            g.total_nodes as f32 / succeeded as f32
        } else {
            0.0
        };

        MetricsSnapshot {
            total_generations: g.total_generations,
            failed_generations: g.failed_generations,
            p50: percentile(&sorted_latencies, 50.0),
            p95: percentile(&sorted_latencies, 95.0),
            p99: percentile(&sorted_latencies, 99.0),
            history_count: g.latencies.len(),
            avg_node_count,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MetricsState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new(1024)
    }
}

fn push_latency(state: &mut MetricsState, latency_us: u64) {
    state.generation.latencies.push_back(latency_us);
    if state.generation.latencies.len() > state.max_history {
        state.generation.latencies.pop_front();
    }
}

fn percentile(sorted: &[u64], p: f32) -> u64 {
    if sorted.is_empty() {
        return 0;
    }
    let idx = ((p / 100.0) * (sorted.len() as f32)).ceil() as usize;
    sorted[idx.saturating_sub(1).min(sorted.len() - 1)]
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MetricsSnapshot {
    pub total_generations: u64,
    pub failed_generations: u64,
    pub p50: u64,
    pub p95: u64,
    pub p99: u64,
    pub history_count: usize,
    pub avg_node_count: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_counts_successes_and_failures() {
        let metrics = MetricsCollector::new(16);
        metrics.record_success(100, 7);
        metrics.record_success(300, 9);
        metrics.record_failure(50);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.total_generations, 3);
        assert_eq!(snapshot.failed_generations, 1);
        assert_eq!(snapshot.avg_node_count, 8.0);
        assert_eq!(snapshot.history_count, 3);
        assert_eq!(snapshot.p50, 100);
        assert_eq!(snapshot.p99, 300);
    }

    #[test]
    fn test_history_is_bounded() {
        let metrics = MetricsCollector::new(2);
        for latency in [10, 20, 30] {
            metrics.record_success(latency, 1);
        }

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.history_count, 2);
        assert_eq!(snapshot.p50, 20);
        assert_eq!(snapshot.total_generations, 3);
    }

    #[test]
    fn test_empty_snapshot_is_zeroed() {
        let snapshot = MetricsCollector::default().snapshot();
        assert_eq!(snapshot.total_generations, 0);
        assert_eq!(snapshot.p95, 0);
        assert_eq!(snapshot.avg_node_count, 0.0);
    }
}
