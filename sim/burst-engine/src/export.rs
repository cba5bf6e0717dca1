//! Dense matrix rendering and artifact writing.
//!
//! The sparse pair tables are the working representation; the dense square
//! matrix exists only here, built on demand over the full sorted name set.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ExportError;
use crate::types::{Cycle, PairTable, Policy};

/// One written artifact, for logging and determinism checks.
#[derive(Debug, Clone)]
pub struct Artifact {
  pub path: PathBuf,
  pub bytes: usize,
  /// blake3 hex digest of the artifact contents.
  pub digest: String,
}

/// Deterministic artifact file name for one (window, policy) table.
pub fn artifact_name(window: Cycle, policy: Policy) -> String {
  format!("bc{}v{}.txt", window, policy.discriminator())
}

/// Render `table` as a dense square matrix over `names` (already sorted;
/// the same order indexes rows and columns).
///
/// Format: `[` + one `[c,c,...]` row per name, rows joined by `,\n`,
/// closing `]`, no trailing newline. Missing pairs and the diagonal render
/// as 0.
pub fn render_matrix(names: &[&str], table: &PairTable) -> String {
  let mut out = String::from("[");
  for (i, row_name) in names.iter().enumerate() {
    if i > 0 {
      out.push_str(",\n");
    }
    out.push('[');
    let row = table.get(*row_name);
    for (j, col_name) in names.iter().enumerate() {
      if j > 0 {
        out.push(',');
      }
      let count = row
        .and_then(|cols| cols.get(*col_name))
        .map(|c| c.count)
        .unwrap_or(0);
      out.push_str(&count.to_string());
    }
    out.push(']');
  }
  out.push(']');
  out
}

/// Write one artifact: full render in memory, temp sibling file, then
/// rename into place. A failure never leaves a partial artifact or
/// clobbers a previously-written one.
pub fn write_artifact(
  dir: &Path,
  window: Cycle,
  policy: Policy,
  names: &[&str],
  table: &PairTable,
) -> Result<Artifact, ExportError> {
  let rendered = render_matrix(names, table);
  let path = dir.join(artifact_name(window, policy));
  let tmp = path.with_extension(format!("tmp-{}", std::process::id()));
  fs::write(&tmp, rendered.as_bytes()).map_err(|source| ExportError::Write {
    path: tmp.clone(),
    source,
  })?;
  fs::rename(&tmp, &path).map_err(|source| ExportError::Persist {
    path: path.clone(),
    source,
  })?;
  Ok(Artifact {
    path,
    bytes: rendered.len(),
    digest: blake3::hash(rendered.as_bytes()).to_hex().to_string(),
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::PairCounter;

  fn table_with(entries: &[(&str, &str, u64)]) -> PairTable {
    let mut table = PairTable::new();
    for (earlier, later, count) in entries {
      table
        .entry(earlier.to_string())
        .or_default()
        .insert(later.to_string(), PairCounter {
          count: *count,
          last_increment: None,
        });
    }
    table
  }

  #[test]
  fn artifact_names_encode_window_and_policy() {
    assert_eq!(artifact_name(16, Policy::Cumulative), "bc16v1.txt");
    assert_eq!(artifact_name(256, Policy::Debounced), "bc256v2.txt");
  }

  #[test]
  fn empty_ledger_renders_empty_list() {
    assert_eq!(render_matrix(&[], &PairTable::new()), "[]");
  }

  #[test]
  fn single_event_renders_zero_diagonal() {
    assert_eq!(render_matrix(&["a"], &PairTable::new()), "[[0]]");
  }

  #[test]
  fn rows_and_columns_follow_the_given_order() {
    let table = table_with(&[("a", "b", 3), ("c", "a", 7)]);
    let names = ["a", "b", "c"];
    assert_eq!(
      render_matrix(&names, &table),
      "[[0,3,0],\n[0,0,0],\n[7,0,0]]"
    );
  }

  #[test]
  fn missing_pairs_render_zero_not_omitted() {
    // "b" never appears in the table at all; its row is still emitted.
    let table = table_with(&[("a", "c", 1)]);
    let names = ["a", "b", "c"];
    assert_eq!(
      render_matrix(&names, &table),
      "[[0,0,1],\n[0,0,0],\n[0,0,0]]"
    );
  }

  #[test]
  fn written_artifact_matches_render_and_digest_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    let table = table_with(&[("a", "b", 2)]);
    let names = ["a", "b"];

    let first = write_artifact(dir.path(), 16, Policy::Cumulative, &names, &table).unwrap();
    let on_disk = fs::read_to_string(&first.path).unwrap();
    assert_eq!(on_disk, render_matrix(&names, &table));
    assert_eq!(first.bytes, on_disk.len());

    let second = write_artifact(dir.path(), 16, Policy::Cumulative, &names, &table).unwrap();
    assert_eq!(first.digest, second.digest);

    // No temp leftovers once the rename lands.
    let stray: Vec<_> = fs::read_dir(dir.path())
      .unwrap()
      .map(|e| e.unwrap().file_name().into_string().unwrap())
      .filter(|n| n.contains("tmp"))
      .collect();
    assert!(stray.is_empty(), "leftover temp files: {:?}", stray);
  }

  #[test]
  fn rendered_matrix_is_valid_json() {
    let table = table_with(&[("a", "b", 3)]);
    let names = ["a", "b"];
    let parsed: Vec<Vec<u64>> =
      serde_json::from_str(&render_matrix(&names, &table)).unwrap();
    assert_eq!(parsed, vec![vec![0, 3], vec![0, 0]]);
  }
}
