//! Golden-value integration tests.
//!
//! Verifies every (algorithm, backend) combination against known
//! Fibonacci values, driving the bare algorithms so the small-index
//! table cannot mask a broken loop.

use fibmark_bignum::Number;
use fibmark_core::calculator::CoreCalculator;
use fibmark_core::observers::NoOpObserver;
use fibmark_core::progress::CancellationToken;
use fibmark_core::registry;

const GOLDEN: &[(u64, &str)] = &[
    (0, "0"),
    (1, "1"),
    (2, "1"),
    (10, "55"),
    (20, "6765"),
    (92, "7540113804746346429"),
    (93, "12200160415121876738"),
    (94, "19740274219868223167"),
    (100, "354224848179261915075"),
    (200, "280571172992510140037611932413038677189525"),
    (
        300,
        "222232244629420445529739893461909967206666939096499764990979600",
    ),
];

fn compute(algo: &str, mul: &str, n: u64) -> Number {
    let core = registry::core(algo, mul).unwrap();
    let cancel = CancellationToken::new();
    let observer = NoOpObserver::new();
    core.calculate_core(&cancel, &observer, &Number::from(n))
        .unwrap()
}

#[test]
fn golden_values_all_combinations() {
    for algo in registry::ALGORITHMS {
        for mul in registry::BACKENDS {
            for &(n, expected) in GOLDEN {
                assert_eq!(
                    compute(algo, mul, n).render(true),
                    expected,
                    "{algo}/{mul} F({n})"
                );
            }
        }
    }
}

#[test]
fn golden_f1000_matrix_karatsuba() {
    let f1000 = compute("matrix", "karatsuba", 1000);
    let s = f1000.render(true);
    assert!(s.starts_with("43466557686937456435688527675040625802564"));
    assert_eq!(s.len(), 209);
}

#[test]
fn golden_f1000_golden_fft() {
    assert_eq!(
        compute("golden", "fft", 1000),
        compute("linear", "schoolbook", 1000)
    );
}

#[test]
fn truncated_render_of_f100() {
    assert_eq!(compute("matrix", "fft", 100).render(false), "3.542248481e+20");
}
