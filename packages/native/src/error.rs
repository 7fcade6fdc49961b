//! I/O failures reported by attribute operations.

use std::error::Error as StdError;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The category of a failed attribute operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The caller may not access the file.
    AccessDenied,
    /// A move could not be performed as an atomic operation.
    AtomicMoveNotSupported,
    /// A directory could not be deleted because it has entries.
    DirectoryNotEmpty,
    /// The file already exists.
    FileAlreadyExists,
    /// A cycle was found while walking a file tree.
    FileSystemLoop,
    /// The file does not exist.
    NoSuchFile,
    /// The file is not a directory.
    NotDirectory,
    /// The file is not a symbolic link.
    NotLink,
    /// Any other failure tied to one or two files.
    FileSystem,
    /// A failure without file-system detail.
    Other,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [ErrorKind; 10] = [
        ErrorKind::AccessDenied,
        ErrorKind::AtomicMoveNotSupported,
        ErrorKind::DirectoryNotEmpty,
        ErrorKind::FileAlreadyExists,
        ErrorKind::FileSystemLoop,
        ErrorKind::NoSuchFile,
        ErrorKind::NotDirectory,
        ErrorKind::NotLink,
        ErrorKind::FileSystem,
        ErrorKind::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::AccessDenied => "access denied",
            ErrorKind::AtomicMoveNotSupported => "atomic move not supported",
            ErrorKind::DirectoryNotEmpty => "directory not empty",
            ErrorKind::FileAlreadyExists => "file already exists",
            ErrorKind::FileSystemLoop => "file system loop",
            ErrorKind::NoSuchFile => "no such file",
            ErrorKind::NotDirectory => "not a directory",
            ErrorKind::NotLink => "not a link",
            ErrorKind::FileSystem => "file system error",
            ErrorKind::Other => "i/o error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed attribute operation.
///
/// Carries the shape of a file-system failure: the file involved, a second
/// file for two-file operations (moves, links), and a reason. Failures that
/// are not about a file only carry a reason, which is then the whole message.
#[derive(Debug)]
pub struct IoError {
    kind: ErrorKind,
    file: Option<String>,
    other_file: Option<String>,
    reason: Option<String>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl IoError {
    /// Create an error with a message and no file detail.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::from_parts(kind, None, None, Some(message.into()))
    }

    /// Create an error about `file`.
    pub fn for_file(kind: ErrorKind, file: impl Into<String>) -> Self {
        Self::from_parts(kind, Some(file.into()), None, None)
    }

    /// Create an error from its individual parts.
    pub fn from_parts(
        kind: ErrorKind,
        file: Option<String>,
        other_file: Option<String>,
        reason: Option<String>,
    ) -> Self {
        Self {
            kind,
            file,
            other_file,
            reason,
            source: None,
        }
    }

    pub fn with_other_file(mut self, other_file: impl Into<String>) -> Self {
        self.other_file = Some(other_file.into());
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Attach the underlying cause, reported through `source()`.
    pub fn with_source(mut self, source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    pub fn other_file(&self) -> Option<&str> {
        self.other_file.as_deref()
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// The rendered message: `file -> other_file: reason`, skipping absent parts.
    pub fn message(&self) -> String {
        if self.file.is_none() && self.other_file.is_none() {
            return self.reason.clone().unwrap_or_default();
        }

        let mut message = String::new();
        if let Some(file) = &self.file {
            message.push_str(file);
        }
        if let Some(other_file) = &self.other_file {
            message.push_str(" -> ");
            message.push_str(other_file);
        }
        if let Some(reason) = &self.reason {
            message.push_str(": ");
            message.push_str(reason);
        }
        message
    }
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = self.message();
        if message.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.kind, message)
        }
    }
}

impl StdError for IoError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.source {
            Some(e) => Some(e.as_ref()),
            None => None,
        }
    }
}

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        let kind = match e.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::NoSuchFile,
            std::io::ErrorKind::PermissionDenied => ErrorKind::AccessDenied,
            std::io::ErrorKind::AlreadyExists => ErrorKind::FileAlreadyExists,
            _ => ErrorKind::Other,
        };
        IoError::new(kind, e.to_string()).with_source(e)
    }
}

/// Result type alias for attribute operations.
pub type Result<T> = std::result::Result<T, IoError>;
