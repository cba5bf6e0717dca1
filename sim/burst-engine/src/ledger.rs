//! Event ledger: latest value and update cycle per event name.

use std::collections::HashMap;

use crate::types::{Cycle, EventRecord};

/// Per-name event records. Records are created lazily and never removed
/// during a run.
#[derive(Debug, Default)]
pub struct Ledger {
  events: HashMap<String, EventRecord>,
}

impl Ledger {
  pub fn new() -> Self {
    Self::default()
  }

  /// Write the latest value and cycle for `name`, creating the record if
  /// absent.
  pub fn record(&mut self, name: &str, value: f64, cycle: Cycle) {
    let rec = self.events.entry(name.to_string()).or_default();
    rec.value = value;
    rec.last_cycle = cycle;
  }

  /// Latest value for `name`. Reading an unknown name creates a default
  /// zero record; the name is known to the ledger from then on.
  pub fn value(&mut self, name: &str) -> f64 {
    self.events.entry(name.to_string()).or_default().value
  }

  /// Cycle of the latest update for `name`; lazily creates like `value`.
  pub fn last_cycle(&mut self, name: &str) -> Cycle {
    self.events.entry(name.to_string()).or_default().last_cycle
  }

  /// Non-creating read, for the correlation scan and reporting helpers.
  pub fn get(&self, name: &str) -> Option<&EventRecord> {
    self.events.get(name)
  }

  pub fn len(&self) -> usize {
    self.events.len()
  }

  pub fn is_empty(&self) -> bool {
    self.events.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &EventRecord)> {
    self.events.iter().map(|(name, rec)| (name.as_str(), rec))
  }

  /// All known names in ascending lexical order.
  pub fn sorted_names(&self) -> Vec<&str> {
    let mut names: Vec<&str> = self.events.keys().map(|k| k.as_str()).collect();
    names.sort_unstable();
    names
  }
}
