//! Per-operation call counters and duration histograms.
//!
//! A [`Client`](crate::Client) reports every `query`, `query_cas` and `exec`
//! call to its [`Metrics`] sink. The default sink discards measurements;
//! [`Recorder`] keeps them in memory for inspection or export.

use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

/// The client call a measurement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Query,
    QueryCas,
    Exec,
}

/// Whether the measured call returned `Ok`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Success,
    Error,
}

/// Receives one measurement per client call.
pub trait Metrics: fmt::Debug + Send + Sync + 'static {
    fn record(&self, operation: Operation, outcome: Outcome, elapsed: Duration);
}

/// Discards every measurement.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoMetrics;

impl Metrics for NoMetrics {
    fn record(&self, _operation: Operation, _outcome: Outcome, _elapsed: Duration) {}
}

/// Upper bounds of the histogram buckets. The last bucket is unbounded.
pub const DURATION_BUCKETS: [Duration; 8] = [
    Duration::from_millis(1),
    Duration::from_millis(5),
    Duration::from_millis(10),
    Duration::from_millis(50),
    Duration::from_millis(100),
    Duration::from_millis(500),
    Duration::from_secs(1),
    Duration::from_secs(5),
];

/// In-memory [`Metrics`] sink: a call counter and a duration histogram for
/// every operation and outcome.
#[derive(Debug, Default)]
pub struct Recorder {
    series: [[DurationHistogram; 2]; 3],
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of calls recorded for `operation` with `outcome`.
    pub fn count(&self, operation: Operation, outcome: Outcome) -> u64 {
        self.histogram(operation, outcome).count()
    }

    /// The duration histogram for `operation` with `outcome`.
    pub fn histogram(&self, operation: Operation, outcome: Outcome) -> &DurationHistogram {
        &self.series[operation.index()][outcome.index()]
    }
}

impl Metrics for Recorder {
    fn record(&self, operation: Operation, outcome: Outcome, elapsed: Duration) {
        self.series[operation.index()][outcome.index()].record(elapsed);
    }
}

/// Fixed-bucket histogram of call durations.
#[derive(Debug, Default)]
pub struct DurationHistogram {
    /// One counter per entry of [`DURATION_BUCKETS`], plus the overflow bucket
    buckets: [AtomicU64; DURATION_BUCKETS.len() + 1],
    total_nanos: AtomicU64,
}

impl DurationHistogram {
    pub fn record(&self, elapsed: Duration) {
        let bucket = DURATION_BUCKETS
            .iter()
            .position(|le| elapsed <= *le)
            .unwrap_or(DURATION_BUCKETS.len());

        self.buckets[bucket].fetch_add(1, Ordering::Relaxed);

        let nanos = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        self.total_nanos.fetch_add(nanos, Ordering::Relaxed);
    }

    /// Number of recorded durations.
    pub fn count(&self) -> u64 {
        self.buckets
            .iter()
            .map(|bucket| bucket.load(Ordering::Relaxed))
            .sum()
    }

    /// Sum of every recorded duration.
    pub fn total(&self) -> Duration {
        Duration::from_nanos(self.total_nanos.load(Ordering::Relaxed))
    }

    /// Per-bucket counts, in the order of [`DURATION_BUCKETS`], with the
    /// overflow bucket last.
    pub fn buckets(&self) -> Vec<u64> {
        self.buckets
            .iter()
            .map(|bucket| bucket.load(Ordering::Relaxed))
            .collect()
    }
}

impl Operation {
    fn index(self) -> usize {
        match self {
            Self::Query => 0,
            Self::QueryCas => 1,
            Self::Exec => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::QueryCas => "query_cas",
            Self::Exec => "exec",
        }
    }
}

impl Outcome {
    fn index(self) -> usize {
        match self {
            Self::Success => 0,
            Self::Error => 1,
        }
    }

    pub(crate) fn of<T, E>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => Self::Success,
            Err(_) => Self::Error,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
