//! Engine configuration.

use crate::types::Tick;

/// Host-provided timing parameters.
#[derive(Debug, Clone)]
pub struct Config {
  /// Ticks per counting cycle; must be at least 1.
  pub cycle_length_ticks: Tick,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      cycle_length_ticks: 1000,
    }
  }
}
