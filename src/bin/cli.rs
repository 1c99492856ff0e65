//! RestrictKV CLI
//!
//! Runs commands against an in-memory restricted store.
//!
//! Commands come from `--exec` arguments if given, otherwise one per line
//! from stdin. Rules may be preloaded with `--restrict SLAVE MASTER`.

use std::io::{self, BufRead, Write};

use clap::Parser;
use restrictkv::{Command, Config, RestrictedStore};
use tracing_subscriber::{fmt, EnvFilter};

/// RestrictKV CLI
#[derive(Parser, Debug)]
#[command(name = "restrictkv-cli")]
#[command(about = "Key-value store with master/slave write restrictions")]
#[command(version)]
struct Args {
    /// Dictionary capacity hint (keys)
    #[arg(short, long, default_value = "16")]
    capacity: usize,

    /// Preload a restriction, e.g. `--restrict employee=Andy company=Google`
    #[arg(short, long = "restrict", num_args = 2, value_names = ["SLAVE", "MASTER"])]
    restrictions: Vec<String>,

    /// Execute these commands instead of reading stdin
    #[arg(short, long = "exec", value_name = "COMMAND")]
    exec: Vec<String>,

    /// Stop at the first failing command
    #[arg(long)]
    fail_fast: bool,
}

impl Args {
    /// Preloaded (slave, master) rule texts, in command-line order
    fn restriction_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.restrictions
            .chunks_exact(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,restrictkv=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("RestrictKV CLI v{}", restrictkv::VERSION);

    let config = Config::builder().capacity_hint(args.capacity).build();
    let mut store = match RestrictedStore::open(config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            std::process::exit(1);
        }
    };

    for (slave, master) in args.restriction_pairs() {
        if let Err(e) = store.restrict(slave, master) {
            tracing::error!("Failed to preload restriction {} <- {}: {}", slave, master, e);
            std::process::exit(1);
        }
    }

    let mut failures = 0usize;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let lines: Box<dyn Iterator<Item = io::Result<String>>> = if args.exec.is_empty() {
        Box::new(io::stdin().lock().lines())
    } else {
        Box::new(args.exec.clone().into_iter().map(Ok))
    };

    for line in lines {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                tracing::error!("Failed to read input: {}", e);
                std::process::exit(1);
            }
        };
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let result = Command::parse(&line).and_then(|cmd| store.execute(cmd));
        let written = match result {
            Ok(Some(output)) => writeln!(out, "{}", output),
            Ok(None) => writeln!(out, "OK"),
            Err(e) => {
                failures += 1;
                writeln!(out, "ERR {}", e)
            }
        };
        if let Err(e) = written {
            tracing::error!("Failed to write output: {}", e);
            std::process::exit(1);
        }

        if failures > 0 && args.fail_fast {
            break;
        }
    }

    store.close();

    if failures > 0 {
        std::process::exit(2);
    }
}
