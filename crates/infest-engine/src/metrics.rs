//! Run metrics for the simulation driver.
//!
//! [`RunMetrics`] accumulates across every generation since the last
//! construction or reset, and is copied into the final
//! [`CycleReport`](crate::CycleReport).

/// Counters and timing collected while a simulation runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Generations computed so far (rule applications).
    pub generations: u64,
    /// Distinct configurations recorded, including the initial grid.
    pub seen_states: usize,
    /// Largest bug population observed, including the initial grid.
    pub peak_population: u32,
    /// Wall-clock time spent computing generations, in microseconds.
    pub total_us: u64,
}
