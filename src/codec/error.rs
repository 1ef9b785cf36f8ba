//! Error types for the draft-75 codec.
//!
//! Errors fall into two groups. Per-frame errors ([`FramingError`] and
//! [`DecodeError`]) affect a single text frame: the decoder has already
//! returned to its idle state when they are reported, so the stream continues
//! with the next frame. Stream-level errors ([`EofError`] and I/O failures)
//! mean the connection cannot continue.
//!
//! # Error Categories
//!
//! - [`FramingError`]: a text frame outgrew the configured maximum length.
//! - [`DecodeError`]: a completed text frame was not valid UTF-8.
//! - [`EofError`]: the stream ended inside a frame.
//! - [`CodecError`]: top-level enum wrapping all categories plus I/O errors.

use std::{io, str::Utf8Error};

use thiserror::Error;

use super::recovery::RecoveryPolicy;

/// Framing-level errors detected while delimiting a frame.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FramingError {
    /// Text payload exceeded the configured maximum frame length.
    #[error("frame exceeds max length: {size} > {max}")]
    OversizedFrame {
        /// Payload bytes seen before the sentinel.
        size: usize,
        /// Maximum allowed payload size.
        max: usize,
    },
}

/// Payload decoding errors for completed text frames.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The payload between the leading byte and the sentinel is not UTF-8.
    #[error("text frame is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),
}

/// End-of-stream conditions reached in the middle of a frame.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum EofError {
    /// The stream ended before a text frame's sentinel arrived.
    #[error("premature EOF: text frame unterminated after {bytes_received} payload bytes")]
    MidTextFrame {
        /// Payload bytes received before EOF.
        bytes_received: usize,
    },

    /// The stream ended while a length field was still being read.
    #[error("premature EOF during length field after {bytes_received} length bytes")]
    MidLengthHeader {
        /// Length bytes received before EOF.
        bytes_received: usize,
    },

    /// The stream ended while discarding a length-prefixed payload.
    #[error("premature EOF: {remaining} bytes of length-prefixed frame outstanding")]
    MidLengthFrame {
        /// Payload bytes that never arrived.
        remaining: usize,
    },
}

/// Top-level codec error taxonomy.
///
/// # Examples
///
/// ```
/// use draft75::codec::{CodecError, FramingError, RecoveryPolicy};
///
/// let err = CodecError::Framing(FramingError::OversizedFrame {
///     size: 2000,
///     max: 1024,
/// });
///
/// assert_eq!(err.default_recovery_policy(), RecoveryPolicy::Drop);
/// assert!(!err.should_disconnect());
/// ```
#[derive(Debug, Error)]
pub enum CodecError {
    /// Framing layer error.
    #[error("framing error: {0}")]
    Framing(#[from] FramingError),

    /// Text payload decoding error.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Transport layer I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// End-of-stream handling.
    #[error("EOF: {0}")]
    Eof(#[from] EofError),
}

impl CodecError {
    /// Returns the recommended recovery policy for this error.
    ///
    /// | Error Type | Policy |
    /// |------------|--------|
    /// | `Framing` | `Drop` |
    /// | `Decode` | `Drop` |
    /// | `Io` | `Disconnect` |
    /// | `Eof` | `Disconnect` |
    #[must_use]
    pub fn default_recovery_policy(&self) -> RecoveryPolicy {
        match self {
            Self::Framing(_) | Self::Decode(_) => RecoveryPolicy::Drop,
            Self::Io(_) | Self::Eof(_) => RecoveryPolicy::Disconnect,
        }
    }

    /// Returns true if the connection should be terminated.
    ///
    /// # Examples
    ///
    /// ```
    /// use draft75::codec::{CodecError, EofError};
    ///
    /// let err = CodecError::Eof(EofError::MidTextFrame { bytes_received: 3 });
    /// assert!(err.should_disconnect());
    /// ```
    #[must_use]
    pub fn should_disconnect(&self) -> bool {
        self.default_recovery_policy() == RecoveryPolicy::Disconnect
    }

    /// Returns the error category as a string for logging.
    ///
    /// One of: `"framing"`, `"decode"`, `"io"`, or `"eof"`.
    #[must_use]
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Framing(_) => "framing",
            Self::Decode(_) => "decode",
            Self::Io(_) => "io",
            Self::Eof(_) => "eof",
        }
    }
}

impl From<CodecError> for io::Error {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::Io(e) => e,
            CodecError::Framing(e) => io::Error::new(io::ErrorKind::InvalidData, e),
            CodecError::Decode(e) => io::Error::new(io::ErrorKind::InvalidData, e),
            CodecError::Eof(e) => io::Error::new(io::ErrorKind::UnexpectedEof, e),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
