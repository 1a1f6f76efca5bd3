//! The system category: raw platform-reported codes.

use std::io;
use std::sync::OnceLock;

use crate::category::{Category, CategoryRef};
use crate::code::Code;
use crate::condition::Condition;
use crate::errc::Errc;

/// Classifier for whatever numbering the host platform natively uses.
///
/// Message rendering defers to the platform's own facility; the
/// default-condition mapping translates platform values into the portable
/// vocabulary, with [`Errc::Uncategorized`] for values that have no portable
/// equivalent.
pub(crate) struct SystemCategory;

impl Category for SystemCategory {
    fn name(&self) -> &'static str {
        "system"
    }

    fn message(&self, value: i32) -> String {
        // The platform renderer reporting no text is "no text available",
        // never a failure.
        let text = io::Error::from_raw_os_error(value).to_string();
        if text.is_empty() {
            format!("unknown error {value}")
        } else {
            text
        }
    }

    fn default_condition(&self, value: i32) -> Condition {
        portable_condition(value).into()
    }
}

/// On Unix the platform numbering *is* errno, so known values translate
/// one-to-one and everything else is uncategorized.
#[cfg(unix)]
fn portable_condition(raw: i32) -> Errc {
    Errc::from_raw(raw).unwrap_or(Errc::Uncategorized)
}

/// Elsewhere the raw numbering is opaque to us; let the platform classify it
/// and map the classification.
#[cfg(not(unix))]
fn portable_condition(raw: i32) -> Errc {
    crate::io::errc_for_kind(io::Error::from_raw_os_error(raw).kind())
}

/// The process-wide system category singleton.
///
/// Same discipline as [`generic_category`](crate::generic_category): one
/// construction per process, identical handle from every call.
pub fn system_category() -> CategoryRef {
    static INSTANCE: OnceLock<SystemCategory> = OnceLock::new();
    CategoryRef::new(INSTANCE.get_or_init(|| SystemCategory))
}

impl Code {
    /// A system-category code for a raw platform error value.
    ///
    /// ```
    /// use errcat::{system_category, Code};
    ///
    /// let code = Code::from_raw_os_error(2);
    /// assert_eq!(code.category(), system_category());
    /// ```
    pub fn from_raw_os_error(raw: i32) -> Code {
        Code::new(raw, system_category())
    }
}
