//! Core types for the burst engine (JSON contract + internal models).

use serde::Deserialize;
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Time units
// ---------------------------------------------------------------------------

/// Host simulated time, in ticks.
pub type Tick = u64;

/// Discrete counting cycle, derived from ticks by ceiling division.
pub type Cycle = u64;

/// Ascending window boundaries, in cycles. A gap matches the smallest
/// boundary strictly greater than it; a gap >= 256 matches none.
pub const WINDOWS: [Cycle; 5] = [16, 32, 64, 128, 256];

// ---------------------------------------------------------------------------
// Counting policy
// ---------------------------------------------------------------------------

/// How a pair counter advances when a gap falls inside its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
  /// Every qualifying proximity increments.
  Cumulative,
  /// A (pair, window) counter advances at most once per window span.
  Debounced,
}

impl Policy {
  pub const ALL: [Policy; 2] = [Policy::Cumulative, Policy::Debounced];

  /// Artifact-name discriminator: `bc{window}v{discriminator}.txt`.
  pub fn discriminator(self) -> u8 {
    match self {
      Self::Cumulative => 1,
      Self::Debounced => 2,
    }
  }
}

// ---------------------------------------------------------------------------
// Ledger records
// ---------------------------------------------------------------------------

/// Latest reported state for one named event.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EventRecord {
  pub value: f64,
  pub last_cycle: Cycle,
}

// ---------------------------------------------------------------------------
// Pair counters
// ---------------------------------------------------------------------------

/// Counter for one ordered (earlier -> later) event pair in one window.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairCounter {
  pub count: u64,
  /// Cycle at which this counter last advanced; `None` until the first
  /// increment. Only consulted by the debounced policy.
  pub last_increment: Option<Cycle>,
}

/// Sparse table: earlier name -> later name -> counter.
pub type PairTable = HashMap<String, HashMap<String, PairCounter>>;

/// One `PairTable` per window boundary, for a single policy.
#[derive(Debug, Default)]
pub struct WindowTables {
  tables: [PairTable; 5],
}

impl WindowTables {
  pub fn table(&self, window_idx: usize) -> &PairTable {
    &self.tables[window_idx]
  }

  /// Counter for (earlier -> later) in one window, created lazily at zero.
  pub fn counter_mut(
    &mut self,
    window_idx: usize,
    earlier: &str,
    later: &str,
  ) -> &mut PairCounter {
    self.tables[window_idx]
      .entry(earlier.to_string())
      .or_default()
      .entry(later.to_string())
      .or_default()
  }

  /// Read a count without creating entries; missing pairs read as 0.
  pub fn count(&self, window_idx: usize, earlier: &str, later: &str) -> u64 {
    self.tables[window_idx]
      .get(earlier)
      .and_then(|row| row.get(later))
      .map(|c| c.count)
      .unwrap_or(0)
  }
}

// ---------------------------------------------------------------------------
// Inbound types (JSON contract — what the driver reads)
// ---------------------------------------------------------------------------

/// One update line from stdin. Unknown fields are silently ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundUpdate {
  pub name: String,
  pub value: f64,
  pub time: Tick,
}
