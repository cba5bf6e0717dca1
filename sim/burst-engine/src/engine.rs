//! Core engine: owns the ledger and all pair tables, drives the
//! correlation passes and the export.

use std::io::{self, Write};
use std::path::Path;

use crate::clock;
use crate::config::Config;
use crate::correlate;
use crate::error::ExportError;
use crate::export::{self, Artifact};
use crate::ledger::Ledger;
use crate::report;
use crate::types::{Cycle, Policy, Tick, WindowTables, WINDOWS};

/// The burst counter. The host constructs one instance per simulation run,
/// holds it for the run's lifetime, and drives it synchronously; there is
/// no internal locking or background work.
pub struct Engine {
  config: Config,
  ledger: Ledger,
  cumulative: WindowTables,
  debounced: WindowTables,
}

impl Engine {
  pub fn new(config: Config) -> Self {
    Self {
      config,
      ledger: Ledger::new(),
      cumulative: WindowTables::default(),
      debounced: WindowTables::default(),
    }
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  /// Record that `name` had `value` at `tick`, then run one correlation
  /// pass per policy against every other known event.
  pub fn update(&mut self, name: &str, value: f64, tick: Tick) {
    let cycle = clock::cycle_of(tick, self.config.cycle_length_ticks);
    self.ledger.record(name, value, cycle);
    correlate::scan(&mut self.cumulative, &self.ledger, name, cycle, Policy::Cumulative);
    correlate::scan(&mut self.debounced, &self.ledger, name, cycle, Policy::Debounced);
  }

  /// Latest value for `name`; an unknown name comes into existence as a
  /// zero record.
  pub fn value(&mut self, name: &str) -> f64 {
    self.ledger.value(name)
  }

  /// Cycle of the latest update for `name`; lazily creates like `value`.
  pub fn last_cycle(&mut self, name: &str) -> Cycle {
    self.ledger.last_cycle(name)
  }

  /// Count for one (earlier -> later) pair at a window boundary. Unknown
  /// boundaries and unseen pairs read as 0.
  pub fn count(&self, policy: Policy, window: Cycle, earlier: &str, later: &str) -> u64 {
    match WINDOWS.iter().position(|&w| w == window) {
      Some(idx) => self.tables(policy).count(idx, earlier, later),
      None => 0,
    }
  }

  /// All known names in ascending lexical order.
  pub fn event_names(&self) -> Vec<String> {
    self
      .ledger
      .sorted_names()
      .into_iter()
      .map(str::to_string)
      .collect()
  }

  pub fn event_count(&self) -> usize {
    self.ledger.len()
  }

  /// Write all ten artifacts into `dir`: per window ascending, cumulative
  /// then debounced. Counters are read, never mutated, so repeated calls
  /// re-snapshot whatever the tables hold at that point.
  pub fn export_all(&self, dir: &Path) -> Result<Vec<Artifact>, ExportError> {
    let names = self.ledger.sorted_names();
    let mut artifacts = Vec::with_capacity(WINDOWS.len() * Policy::ALL.len());
    for (idx, &window) in WINDOWS.iter().enumerate() {
      for policy in Policy::ALL {
        let table = self.tables(policy).table(idx);
        artifacts.push(export::write_artifact(dir, window, policy, &names, table)?);
      }
    }
    Ok(artifacts)
  }

  pub fn write_event_names<W: Write>(&self, out: &mut W) -> io::Result<()> {
    report::write_event_names(out, &self.ledger)
  }

  pub fn write_value<W: Write>(&self, out: &mut W, name: &str) -> io::Result<()> {
    report::write_value(out, &self.ledger, name)
  }

  pub fn write_all_values<W: Write>(&self, out: &mut W) -> io::Result<()> {
    report::write_all_values(out, &self.ledger)
  }

  fn tables(&self, policy: Policy) -> &WindowTables {
    match policy {
      Policy::Cumulative => &self.cumulative,
      Policy::Debounced => &self.debounced,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  // Unit cycle length: ticks are cycles, which keeps scenarios direct.
  fn unit_engine() -> Engine {
    Engine::new(Config {
      cycle_length_ticks: 1,
    })
  }

  #[test]
  fn close_updates_land_in_the_smallest_window() {
    let mut engine = unit_engine();
    engine.update("a", 1.0, 0);
    engine.update("b", 1.0, 10);
    for policy in Policy::ALL {
      assert_eq!(engine.count(policy, 16, "a", "b"), 1);
      for window in [32, 64, 128, 256] {
        assert_eq!(engine.count(policy, window, "a", "b"), 0);
      }
    }
  }

  #[test]
  fn ticks_are_bucketed_before_correlation() {
    let mut engine = Engine::new(Config {
      cycle_length_ticks: 1000,
    });
    engine.update("a", 1.0, 0); // cycle 0
    engine.update("b", 1.0, 4001); // cycle 5, gap 5
    assert_eq!(engine.count(Policy::Cumulative, 16, "a", "b"), 1);
    assert_eq!(engine.last_cycle("b"), 5);
  }

  #[test]
  fn debounce_suppression_across_updates() {
    let mut engine = unit_engine();
    engine.update("a", 1.0, 0);
    engine.update("b", 1.0, 5);
    engine.update("b", 1.0, 10);
    assert_eq!(engine.count(Policy::Cumulative, 16, "a", "b"), 2);
    assert_eq!(engine.count(Policy::Debounced, 16, "a", "b"), 1);
  }

  #[test]
  fn simultaneous_update_records_nothing() {
    let mut engine = unit_engine();
    engine.update("a", 1.0, 0);
    engine.update("b", 1.0, 50);
    engine.update("c", 1.0, 50);
    // b's tie aborts c's pass entirely; a -> c never counts despite its
    // qualifying gap of 50.
    for policy in Policy::ALL {
      assert_eq!(engine.count(policy, 64, "a", "c"), 0);
      assert_eq!(engine.count(policy, 16, "b", "c"), 0);
      assert_eq!(engine.count(policy, 64, "a", "b"), 1);
    }
  }

  #[test]
  fn unknown_reads_register_the_name() {
    let mut engine = unit_engine();
    assert_eq!(engine.value("ghost"), 0.0);
    assert_eq!(engine.event_names(), vec!["ghost".to_string()]);
  }

  #[test]
  fn unknown_window_boundary_reads_zero() {
    let mut engine = unit_engine();
    engine.update("a", 1.0, 0);
    engine.update("b", 1.0, 10);
    assert_eq!(engine.count(Policy::Cumulative, 17, "a", "b"), 0);
  }
}
