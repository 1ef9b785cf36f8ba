//! Outbound draft-75 text frames.

use std::io;

use bytes::{BufMut, Bytes, BytesMut};
use tokio_util::codec::Encoder;

use super::{
    SENTINEL,
    TEXT_FRAME_START,
    error::{CodecError, FramingError},
};

/// Frame `text` for the wire: `0x00`, the UTF-8 bytes, then `0xFF`.
///
/// Valid UTF-8 never contains the `0xFF` sentinel, so every `&str` yields a
/// well-formed frame.
///
/// # Examples
///
/// ```
/// use draft75::codec::encode;
///
/// assert_eq!(&encode("Hello")[..], &[0x00, 0x48, 0x65, 0x6c, 0x6c, 0x6f, 0xff]);
/// ```
#[must_use]
pub fn encode(text: &str) -> Bytes {
    let mut dst = BytesMut::new();
    encode_into(text, &mut dst);
    dst.freeze()
}

/// Append the frame for `text` to `dst`.
pub fn encode_into(text: &str, dst: &mut BytesMut) {
    dst.reserve(text.len() + 2);
    dst.put_u8(TEXT_FRAME_START);
    dst.extend_from_slice(text.as_bytes());
    dst.put_u8(SENTINEL);
}

/// `tokio_util` encoder producing draft-75 text frames.
///
/// Applies the optional frame limit from
/// [`CodecConfig`](crate::CodecConfig); [`encode`] itself never fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameEncoder {
    max_frame_length: Option<usize>,
}

impl FrameEncoder {
    /// Create an encoder that rejects messages longer than
    /// `max_frame_length` bytes, if set.
    #[must_use]
    pub fn new(max_frame_length: Option<usize>) -> Self { Self { max_frame_length } }
}

impl Encoder<&str> for FrameEncoder {
    type Error = io::Error;

    fn encode(&mut self, item: &str, dst: &mut BytesMut) -> Result<(), Self::Error> {
        match self.max_frame_length {
            Some(max) if item.len() > max => {
                return Err(CodecError::Framing(FramingError::OversizedFrame {
                    size: item.len(),
                    max,
                })
                .into());
            }
            _ => {}
        }
        encode_into(item, dst);
        Ok(())
    }
}

impl Encoder<String> for FrameEncoder {
    type Error = io::Error;

    fn encode(&mut self, item: String, dst: &mut BytesMut) -> Result<(), Self::Error> {
        Encoder::<&str>::encode(self, &item, dst)
    }
}
