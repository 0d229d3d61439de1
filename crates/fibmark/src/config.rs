//! Application configuration from CLI flags and environment.

use clap::Parser;

/// fibmark — Fibonacci strategy driver and benchmark sweep.
#[derive(Parser, Debug)]
#[command(name = "fibmark", version, about)]
pub struct AppConfig {
    /// Fibonacci index to compute. Read from standard input when omitted.
    #[arg(short, long)]
    pub n: Option<String>,

    /// Algorithm to use: linear, matrix, strassen, or golden.
    #[arg(long, default_value = "matrix", env = "FIBMARK_ALGO")]
    pub algo: String,

    /// Multiplication backend: schoolbook, karatsuba, dft, or fft.
    #[arg(long, default_value = "karatsuba", env = "FIBMARK_MUL")]
    pub mul: String,

    /// Print the result as concatenated lower-case hex digits,
    /// most significant first (validation output).
    #[arg(long, conflicts_with = "perf")]
    pub check: bool,

    /// Print only the elapsed time.
    #[arg(long)]
    pub perf: bool,

    /// Print the full decimal expansion without prompting.
    #[arg(long)]
    pub full: bool,

    /// Verbose progress logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Run the time-bounded benchmark sweep instead of a single
    /// computation.
    #[arg(long)]
    pub bench: bool,

    /// Hard time budget in seconds for the benchmark sweep. The soft
    /// budget, after which a running computation is abandoned, is 1.5x
    /// this value.
    #[arg(long, default_value_t = 1.0, env = "FIBMARK_LIMIT")]
    pub limit: f64,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
