//! Reusable categories for exercising the classification laws.
//!
//! The interesting behavior in `errcat` lives at the seam between categories:
//! identity equality, default bridging, and the asymmetric equivalence
//! relation.  This crate provides a small zoo of custom categories so the
//! test suites (and downstream crates writing their own categories) have
//! known specimens to test against:
//!
//! - [`plain_category`] overrides nothing, exposing the trait defaults;
//! - [`store_category`] has private numbering and a real translation table;
//! - [`alpha_category`] / [`beta_category`] are twins with identical
//!   numbering but distinct identities.

use std::sync::OnceLock;

use errcat::{generic_category, Category, CategoryRef, Condition, Errc};

// ---------------------------------------------------------------------------
// Plain: trait defaults only
// ---------------------------------------------------------------------------

/// A category that overrides nothing beyond the required methods, so its
/// codes are treated as already generic-shaped.
pub struct PlainCategory;

impl Category for PlainCategory {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn message(&self, value: i32) -> String {
        format!("plain error {value}")
    }
}

/// Singleton handle to [`PlainCategory`].
pub fn plain_category() -> CategoryRef {
    static INSTANCE: OnceLock<PlainCategory> = OnceLock::new();
    CategoryRef::new(INSTANCE.get_or_init(|| PlainCategory))
}

// ---------------------------------------------------------------------------
// Store: private numbering with a translation table
// ---------------------------------------------------------------------------

/// Missing key in the fictional store.
pub const STORE_MISSING: i32 = 1;
/// Caller lacks access to the store.
pub const STORE_FORBIDDEN: i32 = 2;
/// The store ran out of room.
pub const STORE_FULL: i32 = 3;
/// A failure the store cannot describe portably.
pub const STORE_WEDGED: i32 = 4;

/// A category whose numbering is private and whose
/// [`default_condition`](Category::default_condition) performs real
/// translation into the portable vocabulary.
pub struct StoreCategory;

impl Category for StoreCategory {
    fn name(&self) -> &'static str {
        "store"
    }

    fn message(&self, value: i32) -> String {
        match value {
            STORE_MISSING => "key not present".to_owned(),
            STORE_FORBIDDEN => "store access denied".to_owned(),
            STORE_FULL => "store is full".to_owned(),
            STORE_WEDGED => "store wedged".to_owned(),
            _ => format!("unknown store error {value}"),
        }
    }

    fn default_condition(&self, value: i32) -> Condition {
        let errc = match value {
            STORE_MISSING => Errc::NotFound,
            STORE_FORBIDDEN => Errc::PermissionDenied,
            STORE_FULL => Errc::StorageFull,
            _ => Errc::Uncategorized,
        };
        errc.into()
    }
}

/// Singleton handle to [`StoreCategory`].
pub fn store_category() -> CategoryRef {
    static INSTANCE: OnceLock<StoreCategory> = OnceLock::new();
    CategoryRef::new(INSTANCE.get_or_init(|| StoreCategory))
}

// ---------------------------------------------------------------------------
// Alpha / Beta: identical numbering, distinct identities
// ---------------------------------------------------------------------------

/// One of two twin categories sharing the same numbering.
pub struct AlphaCategory;

impl Category for AlphaCategory {
    fn name(&self) -> &'static str {
        "alpha"
    }

    fn message(&self, value: i32) -> String {
        format!("alpha error {value}")
    }

    fn default_condition(&self, value: i32) -> Condition {
        // Both twins bridge value 1 to the same portable condition.
        match value {
            1 => Errc::NotFound.into(),
            _ => Errc::Uncategorized.into(),
        }
    }
}

/// The other twin; same numbering and bridging as [`AlphaCategory`], but a
/// different instance.
pub struct BetaCategory;

impl Category for BetaCategory {
    fn name(&self) -> &'static str {
        "beta"
    }

    fn message(&self, value: i32) -> String {
        format!("beta error {value}")
    }

    fn default_condition(&self, value: i32) -> Condition {
        match value {
            1 => Errc::NotFound.into(),
            _ => Errc::Uncategorized.into(),
        }
    }
}

/// Singleton handle to [`AlphaCategory`].
pub fn alpha_category() -> CategoryRef {
    static INSTANCE: OnceLock<AlphaCategory> = OnceLock::new();
    CategoryRef::new(INSTANCE.get_or_init(|| AlphaCategory))
}

/// Singleton handle to [`BetaCategory`].
pub fn beta_category() -> CategoryRef {
    static INSTANCE: OnceLock<BetaCategory> = OnceLock::new();
    CategoryRef::new(INSTANCE.get_or_init(|| BetaCategory))
}

/// Every category this crate knows about, built-ins included.
pub fn all_categories() -> Vec<CategoryRef> {
    vec![
        generic_category(),
        errcat::system_category(),
        plain_category(),
        store_category(),
        alpha_category(),
        beta_category(),
    ]
}
