//! Binary entrypoint: read JSON update lines from stdin, export matrices at EOF.
//!
//! Each input line is an InboundUpdate: {"name":"l2.miss","value":1.0,"time":4000}.
//! Blank lines are skipped; malformed lines are logged and skipped. At end of
//! input the ten matrix artifacts are written to BURST_OUT_DIR and the event
//! report goes to stdout.
//!
//! Environment:
//!   BURST_CYCLE_TICKS  ticks per counting cycle (default 1000)
//!   BURST_OUT_DIR      artifact directory (default ".")

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use burst_engine::types::InboundUpdate;
use burst_engine::{Config, Engine};

fn main() {
  tracing_subscriber::fmt::init();

  let cycle_length_ticks: u64 = std::env::var("BURST_CYCLE_TICKS")
    .unwrap_or_else(|_| "1000".into())
    .parse()
    .expect("BURST_CYCLE_TICKS must be an integer");
  if cycle_length_ticks == 0 {
    eprintln!("burst-engine: BURST_CYCLE_TICKS must be at least 1");
    process::exit(2);
  }
  let out_dir = PathBuf::from(std::env::var("BURST_OUT_DIR").unwrap_or_else(|_| ".".into()));

  let mut engine = Engine::new(Config { cycle_length_ticks });

  let stdin = io::stdin();
  for line in stdin.lock().lines() {
    let line = match line {
      Ok(l) => l,
      Err(e) => {
        eprintln!("burst-engine: read error: {}", e);
        process::exit(1);
      }
    };

    // Skip blank lines.
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    let update: InboundUpdate = match serde_json::from_str(trimmed) {
      Ok(u) => u,
      Err(e) => {
        tracing::warn!("skipping malformed update line: {}", e);
        continue;
      }
    };

    engine.update(&update.name, update.value, update.time);
  }

  match engine.export_all(&out_dir) {
    Ok(artifacts) => {
      for artifact in &artifacts {
        tracing::info!(
          path = %artifact.path.display(),
          bytes = artifact.bytes,
          digest = %artifact.digest,
          "wrote matrix artifact"
        );
      }
    }
    Err(e) => {
      // Non-fatal: the report below still reflects in-memory state.
      tracing::error!("export failed: {}", e);
    }
  }

  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());
  let _ = engine.write_event_names(&mut out);
  let _ = engine.write_all_values(&mut out);
  let _ = out.flush();
}
