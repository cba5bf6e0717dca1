//! matrix-view: inspect exported burst-counter matrix artifacts
//!
//! Usage:
//!   matrix-view <artifact.txt>      # print dimensions, totals, hottest cells
//!   matrix-view <artifact.txt> -q   # quiet: exit 0 if well-formed, 1 if not
//!
//! Artifacts are the bc{window}v{policy}.txt files written at export: a
//! square nested list of counts, which happens to be valid JSON. Use in
//! scripts to sanity-check an export before archiving it.

use std::env;
use std::fs;
use std::process;

type Matrix = Vec<Vec<u64>>;

fn load_matrix(path: &str) -> Matrix {
    let contents = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("matrix-view: cannot read {}: {}", path, e);
        process::exit(2);
    });
    serde_json::from_str(&contents).unwrap_or_else(|e| {
        eprintln!("matrix-view: invalid matrix in {}: {}", path, e);
        process::exit(2);
    })
}

fn validate(matrix: &Matrix) -> Result<(), String> {
    let n = matrix.len();
    for (i, row) in matrix.iter().enumerate() {
        if row.len() != n {
            return Err(format!(
                "row {} has {} columns, expected {}",
                i,
                row.len(),
                n
            ));
        }
        if row[i] != 0 {
            return Err(format!("nonzero diagonal at ({}, {})", i, i));
        }
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let quiet = args.iter().any(|a| a == "-q" || a == "--quiet");
    let files: Vec<_> = args.iter().filter(|a| !a.starts_with('-')).skip(1).collect();

    if files.len() != 1 {
        eprintln!("Usage: matrix-view <artifact.txt> [-q|--quiet]");
        eprintln!("  -q  Quiet: only exit code (0=well-formed, 1=malformed)");
        process::exit(2);
    }

    let matrix = load_matrix(files[0]);
    let checked = validate(&matrix);

    if quiet {
        process::exit(if checked.is_ok() { 0 } else { 1 });
    }

    if let Err(msg) = checked {
        eprintln!("matrix-view: {}", msg);
        process::exit(1);
    }

    let n = matrix.len();
    let total: u64 = matrix.iter().flatten().sum();
    let nonzero = matrix.iter().flatten().filter(|&&c| c != 0).count();
    println!("{}x{} matrix, total {} across {} nonzero pairs", n, n, total, nonzero);

    let mut cells: Vec<(usize, usize, u64)> = Vec::new();
    for (i, row) in matrix.iter().enumerate() {
        for (j, &count) in row.iter().enumerate() {
            if count != 0 {
                cells.push((i, j, count));
            }
        }
    }
    cells.sort_by(|a, b| b.2.cmp(&a.2).then(a.0.cmp(&b.0)).then(a.1.cmp(&b.1)));
    for (i, j, count) in cells.iter().take(10) {
        println!("  [{}][{}] = {}", i, j, count);
    }
}
