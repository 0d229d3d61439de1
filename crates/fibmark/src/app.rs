//! Application entry point and dispatch.

use std::io::{BufRead, Write};
use std::time::Instant;

use anyhow::{Context, Result};

use fibmark_bignum::Number;
use fibmark_core::observer::ProgressObserver;
use fibmark_core::observers::{NoOpObserver, TracingObserver};
use fibmark_core::progress::CancellationToken;
use fibmark_core::registry;

use crate::bench;
use crate::config::AppConfig;

/// Run the application.
///
/// # Errors
///
/// Returns an error on malformed input, unknown algorithm/backend
/// names, cancellation, or a benchmark validation mismatch.
pub fn run(config: &AppConfig) -> Result<()> {
    if config.bench {
        return bench::run(config);
    }
    run_driver(config)
}

fn run_driver(config: &AppConfig) -> Result<()> {
    let calc = registry::calculator(&config.algo, &config.mul)?;

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let index_str = match &config.n {
        Some(s) => s.clone(),
        None => read_token(&mut lines)?,
    };
    let index: Number = index_str
        .parse()
        .with_context(|| format!("invalid Fibonacci index {index_str:?}"))?;

    let cancel = CancellationToken::new();
    ctrlc_handler(cancel.clone());

    let observer: Box<dyn ProgressObserver> = if config.verbose {
        Box::new(TracingObserver::new())
    } else {
        Box::new(NoOpObserver::new())
    };

    let quiet = config.check || config.perf;
    if !quiet {
        print!("Computing F_{} in ", index.render(true));
        std::io::stdout().flush()?;
    }

    let start = Instant::now();
    let fib = calc.calculate(&cancel, observer.as_ref(), &index)?;
    let elapsed = start.elapsed();

    if !quiet {
        println!("{elapsed:?}");
    }

    if config.check {
        println!("{}", hex_digits(&fib));
        return Ok(());
    }
    if config.perf {
        println!("{elapsed:?}");
        return Ok(());
    }

    let decimal = fib.render(false);
    println!("Result: {decimal}");

    if decimal.contains('e') {
        if config.full {
            println!("{}", fib.render(true));
        } else {
            expand_prompt(&fib, &mut lines)?;
        }
    }

    Ok(())
}

/// First whitespace-delimited token from standard input, skipping
/// blank lines.
fn read_token(lines: &mut impl Iterator<Item = std::io::Result<String>>) -> Result<String> {
    for line in lines {
        let line = line.context("reading Fibonacci index from stdin")?;
        if let Some(token) = line.split_whitespace().next() {
            return Ok(token.to_string());
        }
    }
    anyhow::bail!("no Fibonacci index on standard input")
}

/// Interactive full-expansion prompt shown when the decimal was
/// truncated. End of input counts as "no".
fn expand_prompt(
    fib: &Number,
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
) -> Result<()> {
    loop {
        print!("Fully expand? [y/n] ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        match line?.trim().chars().next() {
            Some('y' | 'Y') => {
                println!("{}", fib.render(true));
                return Ok(());
            }
            Some('n' | 'N') => return Ok(()),
            _ => {}
        }
    }
}

/// Concatenated lower-case hex digits, most significant first, with
/// no padding between digits.
fn hex_digits(n: &Number) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();
    for d in n.digits().iter().rev() {
        let _ = write!(out, "{d:x}");
    }
    out
}

/// # Panics
///
/// Panics if the Ctrl+C signal handler cannot be registered with the OS.
fn ctrlc_handler(cancel: CancellationToken) {
    ctrlc::set_handler(move || {
        cancel.cancel();
    })
    .expect("Error setting Ctrl+C handler");
}
