//! The [`Category`] capability and its identity-carrying handle.
//!
//! A category classifies one family of integer error codes.  Concrete
//! categories are process-wide singletons: two categories are the same
//! category iff they are the same instance, never by name or content.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

use crate::condition::Condition;
use crate::generic::generic_category;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// A family of integer error codes.
///
/// Implementors are singletons handed out as `&'static dyn Category` (see
/// [`CategoryRef`]).  None of these operations may fail or panic: they are
/// typically invoked while another error is already being reported, and a
/// failure here would mask it.
///
/// Only [`name`](Category::name) and [`message`](Category::message) are
/// required; the remaining operations default to "my codes are already
/// generic-shaped," which is correct for categories whose numbering mirrors
/// the portable vocabulary and overridden by categories that translate.
pub trait Category: Send + Sync + 'static {
    /// Stable identifier for diagnostics.
    ///
    /// Not used for equality; two distinct categories may even share a name
    /// and still compare unequal.
    fn name(&self) -> &'static str;

    /// Human-readable description of `value`.
    ///
    /// Must return a non-empty string for every input, including values the
    /// category has never heard of (`"unknown error N"` style).
    fn message(&self, value: i32) -> String;

    /// The most specific portable [`Condition`] corresponding to `value`.
    fn default_condition(&self, value: i32) -> Condition {
        Condition::new(value, generic_category())
    }

    /// Does `value`, interpreted as a code in this category, mean
    /// `condition`?
    ///
    /// The default routes through [`Category::default_condition`];
    /// categories with cheaper or broader logic may override.
    fn equivalent(&self, value: i32, condition: &Condition) -> bool {
        self.default_condition(value) == *condition
    }

    /// Does a code value equal a condition value, both interpreted in this
    /// category's own space?
    ///
    /// Used when a [`Code`](crate::Code) and a [`Condition`] share this
    /// category; the default is plain value equality.
    fn equivalent_value(&self, code_value: i32, condition_value: i32) -> bool {
        code_value == condition_value
    }
}

// ---------------------------------------------------------------------------
// CategoryRef
// ---------------------------------------------------------------------------

/// Copyable handle to a live category singleton.
///
/// Equality, ordering, and hashing all go by instance identity (the address
/// of the singleton), never by name: that order is arbitrary but stable for
/// the life of the process, which is exactly what map keys need.
///
/// Derefs to [`dyn Category`](Category), so behavior calls read naturally:
///
/// ```
/// use errcat::generic_category;
///
/// let cat = generic_category();
/// assert_eq!(cat.name(), "generic");
/// ```
#[derive(Clone, Copy)]
pub struct CategoryRef(&'static dyn Category);

impl CategoryRef {
    /// Wrap a reference to a category singleton.
    pub const fn new(category: &'static dyn Category) -> Self {
        Self(category)
    }

    /// The underlying trait object.
    pub fn get(self) -> &'static dyn Category {
        self.0
    }

    /// Thin address of the singleton; the identity key.
    fn addr(self) -> usize {
        self.0 as *const dyn Category as *const () as usize
    }
}

impl Deref for CategoryRef {
    type Target = dyn Category;

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

impl PartialEq for CategoryRef {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl Eq for CategoryRef {}

impl PartialOrd for CategoryRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CategoryRef {
    fn cmp(&self, other: &Self) -> Ordering {
        self.addr().cmp(&other.addr())
    }
}

impl Hash for CategoryRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl fmt::Debug for CategoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CategoryRef").field(&self.0.name()).finish()
    }
}

impl fmt::Display for CategoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.name())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::system_category;
    use std::collections::HashSet;

    struct Plain;

    impl Category for Plain {
        fn name(&self) -> &'static str {
            "plain"
        }

        fn message(&self, value: i32) -> String {
            format!("plain error {value}")
        }
    }

    fn plain() -> CategoryRef {
        static INSTANCE: std::sync::OnceLock<Plain> = std::sync::OnceLock::new();
        CategoryRef::new(INSTANCE.get_or_init(|| Plain))
    }

    #[test]
    fn identity_equality() {
        assert_eq!(generic_category(), generic_category());
        assert_eq!(system_category(), system_category());
        assert_ne!(generic_category(), system_category());
        assert_ne!(plain(), generic_category());
        assert_eq!(plain(), plain());
    }

    #[test]
    fn ordering_is_strict_and_consistent() {
        let cats = [generic_category(), system_category(), plain()];
        for a in cats {
            assert_eq!(a.cmp(&a), Ordering::Equal);
            for b in cats {
                // Asymmetry: a < b implies !(b < a).
                if a < b {
                    assert!(!(b < a));
                    assert_ne!(a, b);
                }
                assert_eq!(a.partial_cmp(&b), Some(a.cmp(&b)));
            }
        }
    }

    #[test]
    fn hash_follows_identity() {
        let mut set = HashSet::new();
        set.insert(generic_category());
        set.insert(generic_category());
        set.insert(system_category());
        set.insert(plain());
        assert_eq!(set.len(), 3);
        assert!(set.contains(&generic_category()));
    }

    #[test]
    fn default_condition_lands_in_generic() {
        let cond = plain().default_condition(42);
        assert_eq!(cond.category(), generic_category());
        assert_eq!(cond.value(), 42);
    }

    #[test]
    fn default_equivalent_matches_default_condition() {
        for v in [-3, 0, 2, 13, 9999] {
            let cond = plain().default_condition(v);
            assert!(plain().equivalent(v, &cond));
            let other = Condition::new(v + 1, generic_category());
            assert_eq!(plain().equivalent(v, &other), cond == other);
        }
    }

    #[test]
    fn default_equivalent_value_is_plain_equality() {
        assert!(plain().equivalent_value(7, 7));
        assert!(!plain().equivalent_value(7, 8));
    }

    #[test]
    fn debug_and_display_show_name() {
        assert_eq!(format!("{:?}", plain()), "CategoryRef(\"plain\")");
        assert_eq!(plain().to_string(), "plain");
    }
}
