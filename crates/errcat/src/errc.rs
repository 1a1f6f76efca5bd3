//! [`Errc`]: the portable vocabulary of error conditions.
//!
//! Discriminants are the classic POSIX errno values, so on Unix hosts the
//! generic and system numbering coincide for these conditions.  EAGAIN and
//! EWOULDBLOCK share a value on Linux; they are one variant here.

use serde::{Deserialize, Serialize};

use crate::category::CategoryRef;
use crate::code::Code;
use crate::condition::Condition;
use crate::generic::generic_category;

/// Portable error condition, the generic category's numbering.
///
/// This is the small cross-platform set every other category's codes can be
/// bridged into.  The numeric meaning of anything *outside* this set belongs
/// to whichever category minted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum Errc {
    // -- Process / permission --
    /// EPERM: the operation is not permitted for this process.
    OperationNotPermitted = 1,
    /// ENOENT: no such file or directory.
    NotFound = 2,
    /// ESRCH: no such process.
    NoSuchProcess = 3,
    /// EINTR: a signal interrupted the call.
    Interrupted = 4,
    /// EACCES: permission denied.
    PermissionDenied = 13,

    // -- Memory / resources --
    /// EAGAIN / EWOULDBLOCK: the operation would block.
    WouldBlock = 11,
    /// ENOMEM: out of memory.
    OutOfMemory = 12,
    /// EBUSY: device or resource busy.
    Busy = 16,
    /// EMFILE: per-process file descriptor limit reached.
    TooManyOpenFiles = 24,

    // -- Filesystem --
    /// EEXIST: the entity already exists.
    AlreadyExists = 17,
    /// ENOTDIR: a path component is not a directory.
    NotADirectory = 20,
    /// EISDIR: the entity is a directory.
    IsADirectory = 21,
    /// EFBIG: file too large.
    FileTooLarge = 27,
    /// ENOSPC: no space left on device.
    StorageFull = 28,
    /// ENAMETOOLONG: file name too long.
    NameTooLong = 36,

    // -- I/O --
    /// EIO: low-level input/output error.
    IoError = 5,
    /// EBADF: bad file descriptor.
    BadFileDescriptor = 9,
    /// EINVAL: invalid argument.
    InvalidArgument = 22,
    /// EPIPE: broken pipe.
    BrokenPipe = 32,
    /// EOPNOTSUPP: operation not supported.
    NotSupported = 95,

    // -- Networking --
    /// EADDRINUSE: address already in use.
    AddrInUse = 98,
    /// EADDRNOTAVAIL: cannot assign requested address.
    AddrNotAvailable = 99,
    /// ENETDOWN: network is down.
    NetworkDown = 100,
    /// ENETUNREACH: network is unreachable.
    NetworkUnreachable = 101,
    /// ECONNABORTED: connection aborted.
    ConnectionAborted = 103,
    /// ECONNRESET: connection reset by peer.
    ConnectionReset = 104,
    /// ENOTCONN: transport endpoint is not connected.
    NotConnected = 107,
    /// ETIMEDOUT: the operation timed out.
    TimedOut = 110,
    /// ECONNREFUSED: connection refused.
    ConnectionRefused = 111,
    /// EHOSTUNREACH: no route to host.
    HostUnreachable = 113,
    /// EINPROGRESS: operation now in progress.
    InProgress = 115,

    // -- Catch-all --
    /// A platform code with no portable equivalent.
    ///
    /// Deliberately far outside the errno range so it can never collide with
    /// a real platform value.  Bridging an unknown system code lands here,
    /// and here only.
    Uncategorized = 999,
}

impl Errc {
    /// Every portable condition, for exhaustive iteration.
    pub const ALL: &'static [Errc] = &[
        Errc::OperationNotPermitted,
        Errc::NotFound,
        Errc::NoSuchProcess,
        Errc::Interrupted,
        Errc::IoError,
        Errc::BadFileDescriptor,
        Errc::WouldBlock,
        Errc::OutOfMemory,
        Errc::PermissionDenied,
        Errc::Busy,
        Errc::AlreadyExists,
        Errc::NotADirectory,
        Errc::IsADirectory,
        Errc::InvalidArgument,
        Errc::TooManyOpenFiles,
        Errc::FileTooLarge,
        Errc::StorageFull,
        Errc::BrokenPipe,
        Errc::NameTooLong,
        Errc::NotSupported,
        Errc::AddrInUse,
        Errc::AddrNotAvailable,
        Errc::NetworkDown,
        Errc::NetworkUnreachable,
        Errc::ConnectionAborted,
        Errc::ConnectionReset,
        Errc::NotConnected,
        Errc::TimedOut,
        Errc::ConnectionRefused,
        Errc::HostUnreachable,
        Errc::InProgress,
        Errc::Uncategorized,
    ];

    /// The integer value of this condition in the generic numbering.
    pub const fn value(self) -> i32 {
        self as i32
    }

    /// Look a raw generic value back up; `None` for anything outside the
    /// portable set.
    pub fn from_raw(value: i32) -> Option<Errc> {
        let errc = match value {
            1 => Errc::OperationNotPermitted,
            2 => Errc::NotFound,
            3 => Errc::NoSuchProcess,
            4 => Errc::Interrupted,
            5 => Errc::IoError,
            9 => Errc::BadFileDescriptor,
            11 => Errc::WouldBlock,
            12 => Errc::OutOfMemory,
            13 => Errc::PermissionDenied,
            16 => Errc::Busy,
            17 => Errc::AlreadyExists,
            20 => Errc::NotADirectory,
            21 => Errc::IsADirectory,
            22 => Errc::InvalidArgument,
            24 => Errc::TooManyOpenFiles,
            27 => Errc::FileTooLarge,
            28 => Errc::StorageFull,
            32 => Errc::BrokenPipe,
            36 => Errc::NameTooLong,
            95 => Errc::NotSupported,
            98 => Errc::AddrInUse,
            99 => Errc::AddrNotAvailable,
            100 => Errc::NetworkDown,
            101 => Errc::NetworkUnreachable,
            103 => Errc::ConnectionAborted,
            104 => Errc::ConnectionReset,
            107 => Errc::NotConnected,
            110 => Errc::TimedOut,
            111 => Errc::ConnectionRefused,
            113 => Errc::HostUnreachable,
            115 => Errc::InProgress,
            999 => Errc::Uncategorized,
            _ => return None,
        };
        Some(errc)
    }

    /// Portable, strerror-style description.
    pub const fn message(self) -> &'static str {
        match self {
            Errc::OperationNotPermitted => "operation not permitted",
            Errc::NotFound => "no such file or directory",
            Errc::NoSuchProcess => "no such process",
            Errc::Interrupted => "interrupted system call",
            Errc::IoError => "input/output error",
            Errc::BadFileDescriptor => "bad file descriptor",
            Errc::WouldBlock => "resource temporarily unavailable",
            Errc::OutOfMemory => "cannot allocate memory",
            Errc::PermissionDenied => "permission denied",
            Errc::Busy => "device or resource busy",
            Errc::AlreadyExists => "file exists",
            Errc::NotADirectory => "not a directory",
            Errc::IsADirectory => "is a directory",
            Errc::InvalidArgument => "invalid argument",
            Errc::TooManyOpenFiles => "too many open files",
            Errc::FileTooLarge => "file too large",
            Errc::StorageFull => "no space left on device",
            Errc::BrokenPipe => "broken pipe",
            Errc::NameTooLong => "file name too long",
            Errc::NotSupported => "operation not supported",
            Errc::AddrInUse => "address already in use",
            Errc::AddrNotAvailable => "cannot assign requested address",
            Errc::NetworkDown => "network is down",
            Errc::NetworkUnreachable => "network is unreachable",
            Errc::ConnectionAborted => "software caused connection abort",
            Errc::ConnectionReset => "connection reset by peer",
            Errc::NotConnected => "transport endpoint is not connected",
            Errc::TimedOut => "connection timed out",
            Errc::ConnectionRefused => "connection refused",
            Errc::HostUnreachable => "no route to host",
            Errc::InProgress => "operation now in progress",
            Errc::Uncategorized => "uncategorized error",
        }
    }

    /// The condition's owning category: always generic.
    pub fn category(self) -> CategoryRef {
        generic_category()
    }
}

impl std::fmt::Display for Errc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl From<Errc> for Condition {
    fn from(errc: Errc) -> Self {
        Condition::new(errc.value(), generic_category())
    }
}

impl From<Errc> for Code {
    fn from(errc: Errc) -> Self {
        Code::new(errc.value(), generic_category())
    }
}
