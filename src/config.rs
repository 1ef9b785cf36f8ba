//! Codec configuration.
//!
//! [`CodecConfig`] is shared by the decoder and encoder built from a
//! [`FrameCodec`](crate::codec::FrameCodec). The defaults reproduce the plain
//! draft-75 behaviour: text frames may grow without bound.

/// Minimum frame length in bytes.
///
/// Limits passed to [`CodecConfig::max_frame_length`] are clamped to at least
/// this value.
pub const MIN_FRAME_LENGTH: usize = 64;

/// Maximum frame length in bytes (16 MiB).
///
/// Limits passed to [`CodecConfig::max_frame_length`] are clamped to at most
/// this value.
pub const MAX_FRAME_LENGTH: usize = 16 * 1024 * 1024;

pub(crate) fn clamp_frame_length(value: usize) -> usize {
    value.clamp(MIN_FRAME_LENGTH, MAX_FRAME_LENGTH)
}

/// Configuration for decoders and encoders.
///
/// # Examples
///
/// ```
/// use draft75::CodecConfig;
///
/// let config = CodecConfig::default()
///     .max_frame_length(4096)
///     .log_dropped_frames(false);
///
/// assert_eq!(config.max_frame_length, Some(4096));
/// assert!(!config.log_dropped_frames);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodecConfig {
    /// Largest text payload accepted, in bytes.
    ///
    /// `None` leaves text frames unbounded. Larger decoded frames are reported
    /// as [`FramingError::OversizedFrame`](crate::codec::FramingError) and
    /// larger outbound messages are rejected by the encoder.
    ///
    /// Default: `None`.
    pub max_frame_length: Option<usize>,

    /// Whether to log frames dropped by the decoder at warn level.
    ///
    /// Default: true.
    pub log_dropped_frames: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_frame_length: None,
            log_dropped_frames: true,
        }
    }
}

impl CodecConfig {
    /// Bound text payloads to `len` bytes, clamped to
    /// [`MIN_FRAME_LENGTH`]..=[`MAX_FRAME_LENGTH`].
    #[must_use]
    pub fn max_frame_length(mut self, len: usize) -> Self {
        self.max_frame_length = Some(clamp_frame_length(len));
        self
    }

    /// Remove any text payload bound.
    #[must_use]
    pub fn unbounded(mut self) -> Self {
        self.max_frame_length = None;
        self
    }

    /// Set whether to log dropped frames.
    #[must_use]
    pub fn log_dropped_frames(mut self, enabled: bool) -> Self {
        self.log_dropped_frames = enabled;
        self
    }
}
