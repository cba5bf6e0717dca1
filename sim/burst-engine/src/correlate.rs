//! Pairwise ordering scan: buckets the cycle gap between the updating event
//! and every other known event into per-window counters.

use crate::ledger::Ledger;
use crate::types::{Cycle, Policy, WindowTables, WINDOWS};

/// Index of the window matching `gap`: the smallest boundary strictly
/// greater than it. Gaps at or beyond the largest boundary match nothing.
fn window_for(gap: Cycle) -> Option<usize> {
  WINDOWS.iter().position(|&w| gap < w)
}

/// Run one correlation pass for an update of `name` at `cycle`.
///
/// Pairs are keyed (other -> name): the row is the event that updated
/// earlier, the column the one updating now. If any other event shares the
/// updating cycle, the whole pass records nothing; the tie aborts the pass,
/// it is not a per-pair skip. The tie check runs up front so the outcome
/// does not depend on map iteration order.
pub fn scan(
  tables: &mut WindowTables,
  ledger: &Ledger,
  name: &str,
  cycle: Cycle,
  policy: Policy,
) {
  let tied = ledger
    .iter()
    .any(|(other, rec)| other != name && rec.last_cycle == cycle);
  if tied {
    return;
  }

  for (other, rec) in ledger.iter() {
    if other == name {
      continue;
    }
    // Monotonic host time keeps gaps non-negative; if a stale cycle shows
    // up anyway, the pair matches no window.
    let gap = match cycle.checked_sub(rec.last_cycle) {
      Some(g) => g,
      None => continue,
    };
    let idx = match window_for(gap) {
      Some(i) => i,
      None => continue,
    };
    let counter = tables.counter_mut(idx, other, name);
    match policy {
      Policy::Cumulative => counter.count += 1,
      Policy::Debounced => {
        let open = match counter.last_increment {
          None => true,
          Some(last) => cycle - last > WINDOWS[idx],
        };
        if open {
          counter.count += 1;
          counter.last_increment = Some(cycle);
        }
      }
    }
  }
}
