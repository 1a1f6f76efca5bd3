//! Portable error classification: categories, codes, and conditions.
//!
//! Subsystems emit integer error codes under a [`Category`] that understands
//! their numbering; callers test those codes against portable [`Condition`]s
//! without either side knowing about the other.  The bridge is the small
//! generic vocabulary ([`Errc`]): a category translates its own values into
//! generic conditions via [`Category::default_condition`], and
//! [`Code::matches`] asks the code's category whether it means a given
//! condition.
//!
//! Two categories are built in: [`generic_category`] (the portable
//! vocabulary itself) and [`system_category`] (raw platform numbering).
//! Third parties add their own by implementing [`Category`] on a process-wide
//! singleton.
//!
//! ```
//! use errcat::{Code, Condition, Errc};
//!
//! // A raw platform error, classified by the system category...
//! let code = Code::from_raw_os_error(2); // ENOENT on Unix
//!
//! // ...tests true against the portable "not found" condition.
//! # #[cfg(unix)]
//! assert!(code.matches(&Condition::from(Errc::NotFound)));
//! ```
//!
//! Nothing in this crate fails or panics: message rendering falls back to an
//! `"unknown error N"` form, and platform values with no portable
//! correspondence map to the [`Errc::Uncategorized`] sentinel.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod category;
mod code;
mod condition;
mod errc;
mod generic;
mod io;
mod system;

pub use category::{Category, CategoryRef};
pub use code::{Code, CodeDto};
pub use condition::Condition;
pub use errc::Errc;
pub use generic::generic_category;
pub use system::system_category;
