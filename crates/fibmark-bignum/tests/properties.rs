//! Property-based tests for the big-integer arithmetic and the
//! multiplication backends.

use proptest::collection::vec;
use proptest::prelude::*;

use fibmark_bignum::{Dft, Fft, Karatsuba, Multiplier, Nat, Schoolbook};

fn nat8(digits: Vec<u8>) -> Nat<u8> {
    Nat::from_digits(digits)
}

fn nat32(digits: Vec<u32>) -> Nat<u32> {
    Nat::from_digits(digits)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Addition is commutative and associative, with zero as identity.
    #[test]
    fn addition_group_laws(
        a in vec(any::<u32>(), 0..24),
        b in vec(any::<u32>(), 0..24),
        c in vec(any::<u32>(), 0..24),
    ) {
        let (a, b, c) = (nat32(a), nat32(b), nat32(c));
        prop_assert_eq!(&a + &b, &b + &a);
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        prop_assert_eq!(&a + &Nat::zero(), a.clone());
    }

    /// Subtraction undoes addition when it does not underflow.
    #[test]
    fn sub_inverts_add(
        a in vec(any::<u32>(), 0..24),
        b in vec(any::<u32>(), 0..24),
    ) {
        let (a, b) = (nat32(a), nat32(b));
        prop_assert_eq!(&(&a + &b) - &b, a);
    }

    /// Results of every public operation stay normalised.
    #[test]
    fn results_are_normalised(
        a in vec(any::<u32>(), 0..24),
        b in vec(any::<u32>(), 0..24),
        k in 0usize..200,
    ) {
        let (a, b) = (nat32(a), nat32(b));
        for n in [&a + &b, &a & &b, &a | &b, &a << k, &a >> k] {
            prop_assert!(n.digits().last() != Some(&0));
        }
        if a >= b {
            let d = &a - &b;
            prop_assert!(d.digits().last() != Some(&0));
        }
    }

    /// Shifts round-trip and commute with addition.
    #[test]
    fn shift_laws(
        a in vec(any::<u32>(), 0..24),
        b in vec(any::<u32>(), 0..24),
        k in 0usize..130,
    ) {
        let (a, b) = (nat32(a), nat32(b));
        prop_assert_eq!(&(&a << k) >> k, a.clone());
        prop_assert_eq!(&(&a + &b) << k, &(&a << k) + &(&b << k));
    }

    /// Widening and narrowing casts preserve the value.
    #[test]
    fn cast_round_trips(a in vec(any::<u32>(), 0..24)) {
        let a = nat32(a);
        prop_assert_eq!(a.cast::<u8>().cast::<u32>(), a.clone());
        prop_assert_eq!(a.cast::<u16>().cast::<u32>(), a.clone());
        prop_assert_eq!(a.cast::<u8>().cast::<u16>().cast::<u32>(), a);
    }

    /// Decimal render of a parsed string reproduces the input.
    #[test]
    fn decimal_round_trip(v in any::<u64>()) {
        let s = v.to_string();
        let n: Nat<u32> = s.parse().unwrap();
        prop_assert_eq!(n.render(true), s);
    }

    /// The ordering matches the ordering of the underlying values.
    #[test]
    fn ordering_is_consistent(a in any::<u64>(), b in any::<u64>()) {
        let (na, nb) = (Nat::<u8>::from(a), Nat::<u8>::from(b));
        prop_assert_eq!(na.cmp(&nb), a.cmp(&b));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// All four backends agree bit-for-bit at byte width.
    #[test]
    fn backends_agree(
        a in vec(any::<u8>(), 0..96),
        b in vec(any::<u8>(), 0..96),
    ) {
        let (a, b) = (nat8(a), nat8(b));
        let expected = Schoolbook::new().multiply(&a, &b);
        prop_assert_eq!(&Karatsuba::new().multiply(&a, &b), &expected);
        prop_assert_eq!(&Dft::new().multiply(&a, &b), &expected);
        prop_assert_eq!(&Fft::new().multiply(&a, &b), &expected);
    }

    /// Multiplication ring laws, checked through the two fast backends.
    #[test]
    fn multiplication_ring_laws(
        a in vec(any::<u8>(), 0..48),
        b in vec(any::<u8>(), 0..48),
        c in vec(any::<u8>(), 0..48),
    ) {
        let (a, b, c) = (nat8(a), nat8(b), nat8(c));
        let m = Karatsuba::new();
        prop_assert_eq!(m.multiply(&a, &b), m.multiply(&b, &a));
        prop_assert_eq!(
            m.multiply(&m.multiply(&a, &b), &c),
            m.multiply(&a, &m.multiply(&b, &c))
        );
        prop_assert_eq!(
            m.multiply(&a, &(&b + &c)),
            &m.multiply(&a, &b) + &m.multiply(&a, &c)
        );
        prop_assert_eq!(m.multiply(&a, &Nat::from(1u64)), a);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4))]

    /// Karatsuba and FFT stay exact out to 512-digit operands.
    #[test]
    fn large_operand_agreement(
        a in vec(any::<u8>(), 256..512),
        b in vec(any::<u8>(), 256..512),
    ) {
        let (a, b) = (nat8(a), nat8(b));
        let expected = Schoolbook::new().multiply(&a, &b);
        prop_assert_eq!(&Karatsuba::new().multiply(&a, &b), &expected);
        prop_assert_eq!(&Fft::new().multiply(&a, &b), &expected);
    }
}
