//! Tick -> cycle mapping.

use crate::types::{Cycle, Tick};

/// Cycle index for a tick: ceiling division, so every tick inside a cycle
/// interval maps to that cycle's index. `cycle_length` must be nonzero.
///
/// Pure integer arithmetic; never approximate this with floats, the
/// bucketing has to be exact and reproducible.
pub fn cycle_of(tick: Tick, cycle_length: Tick) -> Cycle {
  tick.div_ceil(cycle_length)
}
