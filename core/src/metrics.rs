use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Default)]
pub struct RouteMetrics {
    pub total_queries: u64,
    pub no_route_count: u64,
    pub latencies: VecDeque<u64>, // microseconds
}

pub struct MetricsCollector {
    state: Arc<Mutex<MetricsState>>,
}

struct MetricsState {
    route_metrics: RouteMetrics,
    max_history: usize,
}

impl MetricsCollector {
    pub fn new(max_history: usize) -> Self {
        Self {
            state: Arc::new(Mutex::new(MetricsState {
                route_metrics: RouteMetrics::default(),
                max_history,
            })),
        }
    }

    pub fn record_route(&self, latency_us: u64, no_route: bool) {
        let mut state = self.state.lock().unwrap();
        state.route_metrics.total_queries += 1;
        if no_route {
            state.route_metrics.no_route_count += 1;
        }
        state.route_metrics.latencies.push_back(latency_us);
        if state.route_metrics.latencies.len() > state.max_history {
            state.route_metrics.latencies.pop_front();
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let state = self.state.lock().unwrap();
        let m = &state.route_metrics;

        let mut sorted_latencies: Vec<u64> = m.latencies.iter().copied().collect();
        sorted_latencies.sort_unstable();

        let p50 = percentile(&sorted_latencies, 50.0);
        let p95 = percentile(&sorted_latencies, 95.0);
        let p99 = percentile(&sorted_latencies, 99.0);

        MetricsSnapshot {
            total_queries: m.total_queries,
            no_route_count: m.no_route_count,
            p50,
            p95,
            p99,
            history_count: m.latencies.len(),
        }
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
    pub total_queries: u64,
    pub no_route_count: u64,
    pub p50: u64,
    pub p95: u64,
    pub p99: u64,
    pub history_count: usize,
}
