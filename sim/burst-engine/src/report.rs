//! Read-only diagnostic output: event names and latest values.

use std::io::{self, Write};

use crate::ledger::Ledger;

/// Sorted name list plus the total count.
pub fn write_event_names<W: Write>(out: &mut W, ledger: &Ledger) -> io::Result<()> {
  let mut line = String::from("recorded events:");
  for name in ledger.sorted_names() {
    line.push(' ');
    line.push_str(name);
  }
  writeln!(out, "{}", line)?;
  writeln!(out, "all events count: {}", ledger.len())
}

/// Latest value for a single event; unknown names print 0.
pub fn write_value<W: Write>(out: &mut W, ledger: &Ledger, name: &str) -> io::Result<()> {
  let value = ledger.get(name).map(|rec| rec.value).unwrap_or(0.0);
  writeln!(out, "{}", value)
}

/// All latest values, sorted by name, printed without decimals.
pub fn write_all_values<W: Write>(out: &mut W, ledger: &Ledger) -> io::Result<()> {
  for name in ledger.sorted_names() {
    let value = ledger.get(name).map(|rec| rec.value).unwrap_or(0.0);
    writeln!(out, "{}: {:.0}", name, value)?;
  }
  Ok(())
}
