//! Recovery policies for codec errors.

/// How a caller should respond to a codec error.
///
/// [`CodecError::default_recovery_policy`](crate::codec::CodecError::default_recovery_policy)
/// returns the recommended policy for each error type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecoveryPolicy {
    /// Discard the offending frame and continue with the next one.
    ///
    /// The decoder is already back at a frame boundary, so no bytes of
    /// subsequent frames are lost.
    #[default]
    Drop,

    /// Terminate the connection.
    ///
    /// Used when the stream itself has failed or ended mid-frame.
    Disconnect,
}

impl RecoveryPolicy {
    /// Returns the policy name as a static string for logging.
    ///
    /// # Examples
    ///
    /// ```
    /// use draft75::codec::RecoveryPolicy;
    ///
    /// assert_eq!(RecoveryPolicy::Drop.as_str(), "drop");
    /// assert_eq!(RecoveryPolicy::Disconnect.as_str(), "disconnect");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Drop => "drop",
            Self::Disconnect => "disconnect",
        }
    }
}
