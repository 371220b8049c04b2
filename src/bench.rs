//! Wall-clock timing helpers
//!
//! Measures one callable, or two callables side by side, over a fixed number
//! of iterations. Only available with the `std` feature.

use std::time::{Duration, Instant};

use log::info;

use crate::contracts::ByteConvertible;
use crate::convert::{from_bytes, get_bytes};
use crate::error::Result;

/// Timing of one callable
#[derive(Debug, Clone)]
pub struct BenchStats {
    /// Number of calls
    pub count: usize,
    /// Total elapsed time
    pub total_duration: Duration,
    /// Average nanoseconds per call
    pub avg_ns_per_op: u64,
    /// Calls per second
    pub ops_per_sec: f64,
}

impl BenchStats {
    /// Derive averages from a call count and total duration
    pub fn new(count: usize, total_duration: Duration) -> Self {
        let total_ns = u64::try_from(total_duration.as_nanos()).unwrap_or(u64::MAX);
        let avg_ns_per_op = if count > 0 { total_ns / count as u64 } else { 0 };
        let ops_per_sec = if total_ns > 0 {
            (count as f64) * 1_000_000_000.0 / (total_ns as f64)
        } else {
            0.0
        };

        Self {
            count,
            total_duration,
            avg_ns_per_op,
            ops_per_sec,
        }
    }
}

impl std::fmt::Display for BenchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ops, {:.2}ms total, {} ns/op, {:.0} ops/sec",
            self.count,
            self.total_duration.as_secs_f64() * 1000.0,
            self.avg_ns_per_op,
            self.ops_per_sec
        )
    }
}

/// Timings of two callables run the same number of times
#[derive(Debug, Clone)]
pub struct Comparison {
    /// First callable
    pub first: BenchStats,
    /// Second callable
    pub second: BenchStats,
}

impl Comparison {
    /// How many times slower the second callable was than the first
    ///
    /// Returns `None` if the first callable took no measurable time.
    pub fn ratio(&self) -> Option<f64> {
        let first = self.first.total_duration.as_secs_f64();
        (first > 0.0).then(|| self.second.total_duration.as_secs_f64() / first)
    }
}

/// Time `iterations` calls of `f`
pub fn time<F: FnMut()>(iterations: usize, mut f: F) -> BenchStats {
    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    BenchStats::new(iterations, start.elapsed())
}

/// Time `iterations` calls of `a`, then of `b`
pub fn compare<A, B>(iterations: usize, a: A, b: B) -> Comparison
where
    A: FnMut(),
    B: FnMut(),
{
    let comparison = Comparison {
        first: time(iterations, a),
        second: time(iterations, b),
    };
    info!("first: {}", comparison.first);
    info!("second: {}", comparison.second);
    comparison
}

/// Time `get_bytes` followed by `from_bytes` for `value`
pub fn bench_roundtrip<T: ByteConvertible>(value: &T, count: usize) -> Result<BenchStats> {
    let start = Instant::now();
    for _ in 0..count {
        let window = get_bytes(std::hint::black_box(value));
        let decoded = from_bytes::<T>(&window)?;
        std::hint::black_box(decoded);
    }
    Ok(BenchStats::new(count, start.elapsed()))
}
