// SPDX-License-Identifier: MIT OR Apache-2.0
//! Property-based tests for the classification laws: equality, ordering,
//! default bridging, and message totality.

use std::cmp::Ordering;

use errcat::{generic_category, Code, Condition};
use errcat_conformance::all_categories;
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn arb_category() -> impl Strategy<Value = errcat::CategoryRef> {
    proptest::sample::select(all_categories())
}

fn arb_code() -> impl Strategy<Value = Code> {
    (any::<i32>(), arb_category()).prop_map(|(v, cat)| Code::new(v, cat))
}

fn arb_condition() -> impl Strategy<Value = Condition> {
    (any::<i32>(), arb_category()).prop_map(|(v, cat)| Condition::new(v, cat))
}

// ── Equality law ────────────────────────────────────────────────────────

proptest! {
    /// Two codes are equal iff same category identity and same value.
    #[test]
    fn code_equality_law(a in arb_code(), b in arb_code()) {
        let expected = a.category() == b.category() && a.value() == b.value();
        prop_assert_eq!(a == b, expected);
        prop_assert_eq!(a != b, !expected);
    }

    /// Same law for conditions.
    #[test]
    fn condition_equality_law(a in arb_condition(), b in arb_condition()) {
        let expected = a.category() == b.category() && a.value() == b.value();
        prop_assert_eq!(a == b, expected);
    }

    /// Equality is consistent with the derived ordering.
    #[test]
    fn equality_matches_ordering(a in arb_code(), b in arb_code()) {
        prop_assert_eq!(a == b, a.cmp(&b) == Ordering::Equal);
    }
}

// ── Strict total order ──────────────────────────────────────────────────

proptest! {
    /// Irreflexive: no code is less than itself.
    #[test]
    fn ordering_irreflexive(a in arb_code()) {
        prop_assert!(!(a < a));
        prop_assert_eq!(a.cmp(&a), Ordering::Equal);
    }

    /// Asymmetric: a < b rules out b < a.
    #[test]
    fn ordering_asymmetric(a in arb_code(), b in arb_code()) {
        if a < b {
            prop_assert!(!(b < a));
        }
    }

    /// Transitive across arbitrary triples.
    #[test]
    fn ordering_transitive(a in arb_code(), b in arb_code(), c in arb_code()) {
        if a < b && b < c {
            prop_assert!(a < c);
        }
    }

    /// Total: exactly one of <, ==, > holds.
    #[test]
    fn ordering_total(a in arb_code(), b in arb_code()) {
        let lt = a < b;
        let eq = a == b;
        let gt = a > b;
        prop_assert_eq!(u8::from(lt) + u8::from(eq) + u8::from(gt), 1);
    }

    /// Category identity is the primary sort key, the value secondary.
    #[test]
    fn ordering_keys(a in arb_code(), b in arb_code()) {
        match a.category().cmp(&b.category()) {
            Ordering::Less => prop_assert!(a < b),
            Ordering::Greater => prop_assert!(a > b),
            Ordering::Equal => prop_assert_eq!(a.cmp(&b), a.value().cmp(&b.value())),
        }
    }
}

// ── Default bridging ────────────────────────────────────────────────────

proptest! {
    /// Generic default mapping is the identity fixed point.
    #[test]
    fn generic_fixed_point(v in any::<i32>()) {
        prop_assert_eq!(
            generic_category().default_condition(v),
            Condition::new(v, generic_category())
        );
    }

    /// Equivalence is reflexive in the generic category.
    #[test]
    fn generic_reflexivity(v in any::<i32>()) {
        let code = Code::new(v, generic_category());
        prop_assert!(code.matches(&Condition::new(v, generic_category())));
    }

    /// For a category that overrides nothing, `equivalent` is exactly the
    /// default-condition comparison.
    #[test]
    fn base_equivalent_is_default_comparison(v in any::<i32>(), k in arb_condition()) {
        let plain = errcat_conformance::plain_category();
        prop_assert_eq!(plain.equivalent(v, &k), plain.default_condition(v) == k);
    }

    /// A code trivially matches its own default condition, whatever the
    /// category.
    #[test]
    fn code_matches_its_default_condition(v in any::<i32>(), cat in arb_category()) {
        let code = Code::new(v, cat);
        prop_assert!(code.matches(&code.default_condition()));
    }
}

// ── Message totality ────────────────────────────────────────────────────

proptest! {
    /// No category ever renders an empty message, for any input.
    #[test]
    fn message_never_empty(v in any::<i32>(), cat in arb_category()) {
        prop_assert!(!cat.message(v).is_empty());
        prop_assert!(!Code::new(v, cat).message().is_empty());
    }
}
