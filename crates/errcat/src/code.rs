//! [`Code`]: a specific error from one category's domain.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::category::CategoryRef;
use crate::condition::Condition;
use crate::generic::generic_category;

// ---------------------------------------------------------------------------
// Code
// ---------------------------------------------------------------------------

/// A (value, category) pair: "this specific thing happened in this
/// subsystem."
///
/// The integer's meaning is defined solely by the owning category.  `Code` is
/// plain copyable data; it never owns the category it points at.
///
/// Equality requires the same category identity *and* the same value.  The
/// ordering keys on category identity first (an arbitrary but process-stable
/// order) and value second, so codes work as `BTreeMap`/`BTreeSet` keys.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code {
    category: CategoryRef,
    value: i32,
}

impl Code {
    /// A code for `value` in `category`'s numbering.
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

    /// The most specific portable condition for this code.
    pub fn default_condition(self) -> Condition {
        self.category.default_condition(self.value)
    }

    /// Human-readable description, rendered by the owning category.
    ///
    /// Never fails; unknown values get an `"unknown error N"` style string.
    pub fn message(self) -> String {
        self.category.message(self.value)
    }

    /// Does this code mean `condition`?
    ///
    /// This is the cross-category bridge, and it is deliberately asymmetric:
    /// it asks whether the *code's* category considers itself to mean the
    /// condition.  Two non-generic categories never match directly; they can
    /// only meet through the generic vocabulary.
    ///
    /// ```
    /// use errcat::{Code, Condition, Errc};
    ///
    /// let code = Code::from(Errc::NotFound);
    /// assert!(code.matches(&Condition::from(Errc::NotFound)));
    /// assert!(!code.matches(&Condition::from(Errc::PermissionDenied)));
    /// ```
    pub fn matches(self, condition: &Condition) -> bool {
        if self.category == condition.category()
            && self.category.equivalent_value(self.value, condition.value())
        {
            return true;
        }
        self.category.equivalent(self.value, condition)
    }
}

impl Default for Code {
    /// The "no error" sentinel: value `0` under the generic category.
    fn default() -> Self {
        Self::new(0, generic_category())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category.name(), self.value)
    }
}

impl fmt::Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Code")
            .field("category", &self.category.name())
            .field("value", &self.value)
            .field("message", &self.message())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Serialization support
// ---------------------------------------------------------------------------

/// Serialisable snapshot of a [`Code`].
///
/// A live `Code` holds a reference to its category singleton, which cannot be
/// round-tripped; the snapshot carries the category *name*, the value, and
/// the rendered message instead.  Deserializing a snapshot therefore does not
/// resurrect a comparable `Code` — it is a diagnostic record, not a wire form
/// of the value type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CodeDto {
    /// Diagnostic name of the owning category.
    pub category: String,
    /// Integer value in that category's numbering.
    pub value: i32,
    /// Message rendered at capture time.
    pub message: String,
}

impl From<&Code> for CodeDto {
    fn from(code: &Code) -> Self {
        Self {
            category: code.category.name().to_owned(),
            value: code.value,
            message: code.message(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
