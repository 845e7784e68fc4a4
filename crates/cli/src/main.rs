//! # ordset shell
//!
//! A REPL over one in-memory `OrdSet`. Reads commands from stdin, runs them
//! against the current bucket, and prints results to stdout. Works both
//! interactively and with piped scripts.
//!
//! ## Commands
//!
//! ```text
//! PUT key        Insert a key into the current bucket
//! HAS key        Membership test ("true" / "false")
//! DEL key        Delete a key (prints "(nil)" if absent)
//! KEYS           List the current bucket, greatest first
//! USE [name]     Switch bucket ("" = whole set), resets the cursor
//! LAST           Move the cursor to the bucket's greatest key
//! PREV           Step the cursor to the next smaller key
//! STATS          Print set debug info
//! EXIT / QUIT    Stop
//! ```
//!
//! ## Configuration
//!
//! ```text
//! ORDSET_CAPACITY   page capacity hint      (default: 1024 pages)
//! ORDSET_BUCKET     initial bucket          (default: "")
//! ORDSET_LOG        tracing filter, stderr  (default: "warn")
//! ```
//!
//! ## Example
//!
//! ```text
//! $ cargo run -p cli
//! ordset started (bucket="", capacity=1024)
//! > USE user
//! OK
//! > PUT rob
//! OK
//! > LAST
//! rob
//! > EXIT
//! bye
//! ```

mod shell;

use anyhow::{Context, Result};
use config::Config;
use ordset::OrdSet;
use shell::{Flow, Shell};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cfg = Config::from_env().context("failed to read configuration")?;

    let filter = EnvFilter::try_new(&cfg.log)
        .with_context(|| format!("invalid log filter {:?}", cfg.log))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let set = match cfg.capacity {
        Some(hint) => OrdSet::with_capacity(hint),
        None => OrdSet::new(),
    };
    let mut shell = Shell::new(&set, &cfg.bucket);

    println!(
        "ordset started (bucket={:?}, capacity={})",
        shell.bucket_name(),
        set.capacity()
    );
    println!("Commands: PUT key | HAS key | DEL key | KEYS | USE [name]");
    println!("          LAST | PREV | STATS | EXIT");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        if shell.execute(&line, &mut stdout)? == Flow::Exit {
            break;
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    tracing::debug!(keys = set.len(), "shell finished");
    Ok(())
}
