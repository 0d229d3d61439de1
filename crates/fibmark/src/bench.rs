//! Time-bounded benchmark sweep.
//!
//! Validates the selected strategy against the linear reference
//! (primitive integers up to index 92, big-integer addition up to
//! 512), then searches for a hard-budget-overrun upper bound with
//! geometric growth and samples ~1024 evenly spaced indices below it.
//! Every computation runs on a watchdog-supervised worker thread; at
//! soft-budget expiry the worker is cancelled and abandoned, and its
//! partially-built values are discarded.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use parking_lot::Mutex;

use fibmark_bignum::Number;
use fibmark_core::calculator::{CoreCalculator, FibError};
use fibmark_core::constants::{FIRST_MARK, SECOND_MARK};
use fibmark_core::observers::NoOpObserver;
use fibmark_core::progress::CancellationToken;
use fibmark_core::registry;

use crate::config::AppConfig;

/// Watchdog poll interval.
const NAP: Duration = Duration::from_millis(10);

/// One successful timed computation.
struct Sample {
    runtime: Duration,
    result: Number,
}

/// Run the sweep for the configured (algorithm, backend) pair.
///
/// # Errors
///
/// Returns `FibError::Mismatch` (exit code -1) when a result fails
/// validation against the linear reference.
pub fn run(config: &AppConfig) -> Result<()> {
    // The bare algorithm, so validation exercises the real loops
    // instead of the small-index table.
    let core = registry::core(&config.algo, &config.mul)?;
    let hard = Duration::from_secs_f64(config.limit);
    let soft = Duration::from_secs_f64(config.limit * 1.5);

    let mut best = 0u64;
    let mut cur = 0u64;

    // Correctness first: primitive-integer oracle up to FIRST_MARK.
    let (mut a, mut b) = (0u64, 1u64);
    while cur < FIRST_MARK {
        let Some(sample) = eval(&core, cur, soft) else {
            break;
        };
        if sample.result != Number::from(a) {
            return mismatch(cur, &Number::from(a), &sample.result);
        }
        print_sample(cur, &sample);
        if sample.runtime > soft {
            break;
        }
        if sample.runtime <= hard {
            best = cur;
        }
        let next = a + b;
        a = b;
        b = next;
        cur += 1;
    }

    // Big-integer oracle up to SECOND_MARK.
    if cur == FIRST_MARK {
        let mut aa = Number::from(a);
        let mut bb = Number::from(b);
        while cur <= SECOND_MARK {
            let Some(sample) = eval(&core, cur, soft) else {
                break;
            };
            if sample.result != aa {
                return mismatch(cur, &aa, &sample.result);
            }
            print_sample(cur, &sample);
            if sample.runtime > soft {
                break;
            }
            if sample.runtime <= hard {
                best = cur;
            }
            let next = &aa + &bb;
            aa = std::mem::replace(&mut bb, next);
            cur += 1;
        }
    }

    // Search for an upper bound with roughly x1.375 geometric growth.
    tracing::debug!(start = cur, "searching for upper bound");
    while eval(&core, cur, soft).is_some() {
        cur += cur / 2 - cur / 8;
    }
    tracing::debug!(upper = cur, "upper bound found");

    // ~1024 evenly spaced samples between the marks and the bound.
    let delta = (cur >> 10).max(1);
    if cur >= SECOND_MARK {
        let mut n = SECOND_MARK + 1;
        loop {
            let Some(sample) = eval(&core, n, soft) else {
                break;
            };
            if sample.runtime > soft {
                break;
            }
            print_sample(n, &sample);
            if sample.runtime <= hard {
                best = n;
            }
            n += delta;
        }
    }

    eprintln!("fibmark ({}/{}) final result: {best}", config.algo, config.mul);
    let cancel = CancellationToken::new();
    let observer = NoOpObserver::new();
    let obtained = core
        .calculate_core(&cancel, &observer, &Number::from(best))
        .map_err(anyhow::Error::from)?;
    eprintln!(
        "Fibonacci number obtained: {}",
        obtained.render(obtained.digits().len() < 10)
    );
    Ok(())
}

/// Run one computation under the watchdog. Returns `None` on timeout:
/// the worker is cancelled cooperatively and abandoned without
/// joining, so whatever it allocated is discarded when it notices the
/// token.
fn eval(core: &Arc<dyn CoreCalculator>, n: u64, soft: Duration) -> Option<Sample> {
    let done = Arc::new(AtomicBool::new(false));
    let slot: Arc<Mutex<Option<Sample>>> = Arc::new(Mutex::new(None));
    let cancel = CancellationToken::new();

    let handle = {
        let core = Arc::clone(core);
        let done = Arc::clone(&done);
        let slot = Arc::clone(&slot);
        let cancel = cancel.clone();
        std::thread::Builder::new()
            .name(format!("fib-worker-{n}"))
            .spawn(move || {
                let observer = NoOpObserver::new();
                let index = Number::from(n);
                let start = Instant::now();
                if let Ok(result) = core.calculate_core(&cancel, &observer, &index) {
                    let runtime = start.elapsed();
                    *slot.lock() = Some(Sample { runtime, result });
                    done.store(true, Ordering::Release);
                }
            })
            .ok()?
    };

    let start = Instant::now();
    loop {
        if done.load(Ordering::Acquire) {
            let _ = handle.join();
            return slot.lock().take();
        }
        if start.elapsed() >= soft {
            tracing::debug!(n, "soft budget expired, abandoning worker");
            cancel.cancel();
            return None;
        }
        std::thread::sleep(NAP);
    }
}

fn print_sample(n: u64, sample: &Sample) {
    println!(
        "{:>15} :: {:<20} :: {:.5}",
        n,
        sample.result.render(false),
        sample.runtime.as_secs_f64()
    );
}

fn mismatch(n: u64, expected: &Number, received: &Number) -> Result<()> {
    eprintln!(
        "ERROR: Output fails to compute term {n}:\n\tExpected: {}\n\tReceived: {}",
        expected.render(true),
        received.render(true)
    );
    Err(FibError::Mismatch.into())
}
