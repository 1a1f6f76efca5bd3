//! [`Condition`]: a portable semantic class of error.

use std::fmt;

use crate::category::CategoryRef;
use crate::generic::generic_category;

/// A (value, category) pair: "this general class of situation occurred."
///
/// Structurally a twin of [`Code`](crate::Code), but with a different role:
/// conditions are what callers test against, typically under the generic
/// category, while codes are what fallible operations produce.  The same
/// equality and ordering rules apply — same category identity and same value,
/// ordered by (category identity, value).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Condition {
    category: CategoryRef,
    value: i32,
}

impl Condition {
    /// A condition for `value` in `category`'s numbering.
    pub fn new(value: i32, category: CategoryRef) -> Self {
        Self { category, value }
    }

    /// The integer value.
    pub fn value(self) -> i32 {
        self.value
    }

    /// The owning category.
    pub fn category(self) -> CategoryRef {
        self.category
    }

    /// True iff this is the "no error" sentinel (value `0`).
    pub fn is_ok(self) -> bool {
        self.value == 0
    }

    /// Human-readable description, rendered by the owning category.
    pub fn message(self) -> String {
        self.category.message(self.value)
    }
}

impl Default for Condition {
    /// The "no error" sentinel: value `0` under the generic category.
    fn default() -> Self {
        Self::new(0, generic_category())
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category.name(), self.value)
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condition")
            .field("category", &self.category.name())
            .field("value", &self.value)
            .field("message", &self.message())
            .finish()
    }
}
