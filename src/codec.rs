//! Draft-75 WebSocket framing.
//!
//! The draft-75 scheme multiplexes two frame kinds in one byte stream, chosen
//! by the high bit of each frame's leading byte:
//!
//! | Frame kind | Leading byte | Structure |
//! |---|---|---|
//! | Text | `0x00`–`0x7F` | `lead`, UTF-8 payload, `0xFF` |
//! | Length-prefixed | `0x80`–`0xFF` | `lead`, base-128 length, payload (discarded) |
//!
//! [`FrameDecoder`] turns arbitrarily chunked input into decoded text
//! messages and [`encode`] produces outbound text frames. [`FrameCodec`]
//! builds both from a shared [`CodecConfig`].
//!
//! # Error Handling
//!
//! A frame that cannot be delivered is reported on its own, and decoding
//! resumes with the next frame. See the [`error`] module for the taxonomy and
//! [`RecoveryPolicy`] for the recommended reaction to each error.

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod length;
pub mod receiver;
pub mod recovery;

pub use decoder::FrameDecoder;
pub use encoder::{FrameEncoder, encode, encode_into};
pub use error::{CodecError, DecodeError, EofError, FramingError};
pub use receiver::{FnReceiver, MessageReceiver, from_fn};
pub use recovery::RecoveryPolicy;

use crate::config::CodecConfig;

/// Byte terminating a text frame.
pub const SENTINEL: u8 = 0xFF;

/// Leading byte written before outbound text payloads.
pub const TEXT_FRAME_START: u8 = 0x00;

/// High bit of a leading byte; set for length-prefixed frames.
pub const LENGTH_FRAME_FLAG: u8 = 0x80;

/// Factory for decoders and encoders sharing one configuration.
///
/// Each connection takes its own [`FrameDecoder`]; the codec itself holds no
/// stream state and may be cloned freely.
///
/// # Examples
///
/// ```
/// use draft75::{CodecConfig, codec::FrameCodec};
///
/// let codec = FrameCodec::new(CodecConfig::default().max_frame_length(1024));
/// let mut decoder = codec.decoder();
/// let mut messages = Vec::new();
///
/// decoder.ingest(&draft75::codec::encode("ping"), &mut messages);
/// assert!(matches!(messages.as_slice(), [Ok(text)] if text == "ping"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct FrameCodec {
    config: CodecConfig,
}

impl FrameCodec {
    /// Construct a codec with `config`.
    #[must_use]
    pub fn new(config: CodecConfig) -> Self { Self { config } }

    /// Return the shared configuration.
    #[must_use]
    pub fn config(&self) -> &CodecConfig { &self.config }

    /// Create a decoder with fresh, idle state.
    #[must_use]
    pub fn decoder(&self) -> FrameDecoder { FrameDecoder::with_config(self.config.clone()) }

    /// Create an encoder honouring the configured frame limit.
    #[must_use]
    pub fn encoder(&self) -> FrameEncoder { FrameEncoder::new(self.config.max_frame_length) }
}
