//! The generic category: the portable classifier every other category
//! bridges into.

use std::sync::OnceLock;

use crate::category::{Category, CategoryRef};
use crate::errc::Errc;

/// Classifier for the portable condition vocabulary ([`Errc`]).
///
/// Its default-condition mapping is the identity: generic values already are
/// generic-shaped, so the trait defaults apply unchanged.
pub(crate) struct GenericCategory;

impl Category for GenericCategory {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn message(&self, value: i32) -> String {
        match Errc::from_raw(value) {
            Some(errc) => errc.message().to_owned(),
            None => format!("unknown error {value}"),
        }
    }
}

/// The process-wide generic category singleton.
///
/// Constructed at most once, on first access, regardless of how many threads
/// race here; every call returns a handle to the identical instance.
pub fn generic_category() -> CategoryRef {
    static INSTANCE: OnceLock<GenericCategory> = OnceLock::new();
    CategoryRef::new(INSTANCE.get_or_init(|| GenericCategory))
}
