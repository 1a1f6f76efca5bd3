//! Bridges to `std::io`'s error surface.

use std::io;

use crate::code::Code;
use crate::condition::Condition;
use crate::errc::Errc;

/// Maps the stable `io::ErrorKind` variants onto the portable vocabulary.
pub(crate) fn errc_for_kind(kind: io::ErrorKind) -> Errc {
    match kind {
        io::ErrorKind::NotFound => Errc::NotFound,
        io::ErrorKind::PermissionDenied => Errc::PermissionDenied,
        io::ErrorKind::ConnectionRefused => Errc::ConnectionRefused,
        io::ErrorKind::ConnectionReset => Errc::ConnectionReset,
        io::ErrorKind::ConnectionAborted => Errc::ConnectionAborted,
        io::ErrorKind::NotConnected => Errc::NotConnected,
        io::ErrorKind::AddrInUse => Errc::AddrInUse,
        io::ErrorKind::AddrNotAvailable => Errc::AddrNotAvailable,
        io::ErrorKind::BrokenPipe => Errc::BrokenPipe,
        io::ErrorKind::AlreadyExists => Errc::AlreadyExists,
        io::ErrorKind::WouldBlock => Errc::WouldBlock,
        io::ErrorKind::InvalidInput => Errc::InvalidArgument,
        io::ErrorKind::InvalidData => Errc::InvalidArgument,
        io::ErrorKind::TimedOut => Errc::TimedOut,
        io::ErrorKind::Interrupted => Errc::Interrupted,
        io::ErrorKind::Unsupported => Errc::NotSupported,
        io::ErrorKind::OutOfMemory => Errc::OutOfMemory,
        _ => Errc::Uncategorized,
    }
}

impl From<io::ErrorKind> for Condition {
    /// The portable condition a given `io::ErrorKind` stands for.
    ///
    /// Kinds with no portable counterpart land on the
    /// [`Errc::Uncategorized`] sentinel.
    fn from(kind: io::ErrorKind) -> Self {
        errc_for_kind(kind).into()
    }
}

impl Code {
    /// Classify a `std::io::Error`.
    ///
    /// Errors backed by a raw platform value become system-category codes,
    /// keeping the full platform detail; synthetic errors fall back to a
    /// generic code derived from their kind.
    pub fn from_io_error(err: &io::Error) -> Code {
        match err.raw_os_error() {
            Some(raw) => Code::from_raw_os_error(raw),
            None => errc_for_kind(err.kind()).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generic::generic_category;
    use crate::system::system_category;

    #[test]
    fn kind_maps_to_portable_condition() {
        assert_eq!(
            Condition::from(io::ErrorKind::NotFound),
            Condition::from(Errc::NotFound)
        );
        assert_eq!(
            Condition::from(io::ErrorKind::WouldBlock),
            Condition::from(Errc::WouldBlock)
        );
        assert_eq!(
            Condition::from(io::ErrorKind::InvalidData),
            Condition::from(Errc::InvalidArgument)
        );
    }

    #[test]
    fn unmapped_kind_hits_sentinel() {
        assert_eq!(
            Condition::from(io::ErrorKind::UnexpectedEof),
            Condition::from(Errc::Uncategorized)
        );
    }

    #[test]
    fn os_backed_error_becomes_system_code() {
        let err = io::Error::from_raw_os_error(13);
        let code = Code::from_io_error(&err);
        assert_eq!(code.category(), system_category());
        assert_eq!(code.value(), 13);
        #[cfg(unix)]
        assert!(code.matches(&Condition::from(Errc::PermissionDenied)));
    }

    #[test]
    fn synthetic_error_becomes_generic_code() {
        let err = io::Error::new(io::ErrorKind::TimedOut, "took too long");
        let code = Code::from_io_error(&err);
        assert_eq!(code.category(), generic_category());
        assert_eq!(code, Code::from(Errc::TimedOut));
    }
}
