//! Incremental decoder for draft-75 frames.
//!
//! The decoder is an explicit state machine. Every byte read while idle picks
//! the kind of the next frame from its high bit: clear starts a text frame
//! that runs to the `0xFF` sentinel, set starts a length-prefixed frame whose
//! payload is skipped. State survives between calls, so frames may be split
//! across any number of input chunks.

use std::{io, str};

use bytes::{Buf, BytesMut};
use log::warn;
use tokio_util::codec::Decoder;

use super::{
    LENGTH_FRAME_FLAG,
    SENTINEL,
    error::{CodecError, DecodeError, EofError, FramingError},
    length::{LengthAccumulator, LengthProgress},
    receiver::MessageReceiver,
};
use crate::config::CodecConfig;

/// Payload bytes beyond the limit, recorded once a text frame overflows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Overflow {
    size: usize,
    max: usize,
}

#[derive(Debug, Default)]
struct TextFrame {
    payload: BytesMut,
    overflow: Option<Overflow>,
}

impl TextFrame {
    fn extend(&mut self, bytes: &[u8], max_frame_length: Option<usize>) {
        if let Some(overflow) = &mut self.overflow {
            overflow.size = overflow.size.saturating_add(bytes.len());
            return;
        }

        let size = self.payload.len().saturating_add(bytes.len());
        match max_frame_length {
            Some(max) if size > max => {
                self.overflow = Some(Overflow { size, max });
                self.payload = BytesMut::new();
            }
            _ => self.payload.extend_from_slice(bytes),
        }
    }

    fn len(&self) -> usize { self.overflow.map_or(self.payload.len(), |overflow| overflow.size) }
}

/// Progress through a length-prefixed frame.
#[derive(Debug)]
enum Skip {
    /// Reading the length field.
    Length(LengthAccumulator),
    /// Discarding payload bytes.
    Payload { remaining: usize },
}

#[derive(Debug, Default)]
enum DecoderState {
    #[default]
    Idle,
    InTextFrame(TextFrame),
    SkippingLengthFrame(Skip),
}

/// Bytes consumed by one scan and the frame it completed, if any.
struct Scan {
    consumed: usize,
    outcome: Option<Result<String, CodecError>>,
}

/// Stateful draft-75 decoder for a single connection.
///
/// Feed raw bytes with [`ingest`](Self::ingest), or drive it through
/// `tokio_util`'s [`Decoder`] trait inside a `FramedRead`. Either way,
/// splitting the input differently never changes the decoded messages.
///
/// # Examples
///
/// ```
/// use draft75::codec::FrameDecoder;
///
/// let mut decoder = FrameDecoder::new();
/// let mut messages = Vec::new();
///
/// decoder.ingest(&[0x00, 0x48, 0x65, 0x6c], &mut messages);
/// assert!(messages.is_empty());
///
/// decoder.ingest(&[0x6c, 0x6f, 0xff], &mut messages);
/// assert!(matches!(messages.as_slice(), [Ok(text)] if text == "Hello"));
/// ```
#[derive(Debug, Default)]
pub struct FrameDecoder {
    state: DecoderState,
    config: CodecConfig,
}

impl FrameDecoder {
    /// Create a decoder with the default, unbounded configuration.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Create a decoder using `config`.
    #[must_use]
    pub fn with_config(config: CodecConfig) -> Self {
        Self {
            state: DecoderState::Idle,
            config,
        }
    }

    /// Return the configuration this decoder applies.
    #[must_use]
    pub fn config(&self) -> &CodecConfig { &self.config }

    /// Process `bytes` and report every frame they complete to `receiver`.
    ///
    /// Bytes belonging to an unfinished frame are retained for the next call.
    /// Per-frame errors are reported through
    /// [`MessageReceiver::receive_error`] and decoding continues with the
    /// following frame.
    pub fn ingest<R>(&mut self, mut bytes: &[u8], receiver: &mut R)
    where
        R: MessageReceiver + ?Sized,
    {
        while !bytes.is_empty() {
            let Scan { consumed, outcome } = self.scan(bytes);
            bytes = bytes.get(consumed..).unwrap_or_default();
            match outcome {
                Some(Ok(message)) => receiver.receive(message),
                Some(Err(err)) => {
                    self.log_dropped(&err);
                    receiver.receive_error(err);
                }
                None => {}
            }
        }
    }

    /// Returns true when the decoder sits between frames.
    #[must_use]
    pub fn is_idle(&self) -> bool { matches!(self.state, DecoderState::Idle) }

    /// Number of payload bytes held for the current text frame.
    ///
    /// Zero unless a text frame is in progress. Bytes counted past an
    /// exceeded frame limit are not held.
    #[must_use]
    pub fn buffered_len(&self) -> usize {
        match &self.state {
            DecoderState::InTextFrame(frame) => frame.payload.len(),
            DecoderState::Idle | DecoderState::SkippingLengthFrame(_) => 0,
        }
    }

    /// Discard any partial frame and return to the idle state.
    pub fn reset(&mut self) { self.state = DecoderState::Idle; }

    /// Check that the stream may end here.
    ///
    /// # Errors
    ///
    /// Returns an [`EofError`] describing the unfinished frame when the
    /// decoder is not between frames.
    pub fn finish(&self) -> Result<(), EofError> {
        match &self.state {
            DecoderState::Idle => Ok(()),
            DecoderState::InTextFrame(frame) => Err(EofError::MidTextFrame {
                bytes_received: frame.len(),
            }),
            DecoderState::SkippingLengthFrame(Skip::Length(length)) => {
                Err(EofError::MidLengthHeader {
                    bytes_received: length.bytes_read(),
                })
            }
            DecoderState::SkippingLengthFrame(Skip::Payload { remaining }) => {
                Err(EofError::MidLengthFrame {
                    remaining: *remaining,
                })
            }
        }
    }

    /// Advance through `input` until one text frame completes or the input
    /// runs out. Always consumes at least one byte of non-empty input.
    fn scan(&mut self, input: &[u8]) -> Scan {
        let mut consumed = 0;
        while let Some(rest) = input.get(consumed..).filter(|rest| !rest.is_empty()) {
            match &mut self.state {
                DecoderState::Idle => {
                    let lead = rest[0];
                    consumed += 1;
                    self.state = if lead & LENGTH_FRAME_FLAG == 0 {
                        DecoderState::InTextFrame(TextFrame::default())
                    } else {
                        DecoderState::SkippingLengthFrame(Skip::Length(LengthAccumulator::new()))
                    };
                }
                DecoderState::InTextFrame(frame) => {
                    let Some(end) = rest.iter().position(|&byte| byte == SENTINEL) else {
                        frame.extend(rest, self.config.max_frame_length);
                        consumed = input.len();
                        continue;
                    };
                    frame.extend(&rest[..end], self.config.max_frame_length);
                    consumed += end + 1;
                    let frame = std::mem::take(frame);
                    self.state = DecoderState::Idle;
                    return Scan {
                        consumed,
                        outcome: Some(complete_text_frame(frame)),
                    };
                }
                DecoderState::SkippingLengthFrame(Skip::Length(length)) => {
                    consumed += 1;
                    if let LengthProgress::Complete(remaining) = length.push(rest[0]) {
                        if length.is_saturated() {
                            warn!("length-prefixed frame declares more than usize::MAX bytes");
                        }
                        tracing::debug!(remaining, "skipping length-prefixed frame");
                        self.state = if remaining == 0 {
                            DecoderState::Idle
                        } else {
                            DecoderState::SkippingLengthFrame(Skip::Payload { remaining })
                        };
                    }
                }
                DecoderState::SkippingLengthFrame(Skip::Payload { remaining }) => {
                    let skipped = (*remaining).min(rest.len());
                    *remaining -= skipped;
                    consumed += skipped;
                    if *remaining == 0 {
                        self.state = DecoderState::Idle;
                    }
                }
            }
        }

        Scan {
            consumed,
            outcome: None,
        }
    }

    fn log_dropped(&self, err: &CodecError) {
        if self.config.log_dropped_frames {
            warn!(
                "dropping text frame: error_type={}, error={err}",
                err.error_type()
            );
        }
    }
}

fn complete_text_frame(frame: TextFrame) -> Result<String, CodecError> {
    if let Some(Overflow { size, max }) = frame.overflow {
        return Err(FramingError::OversizedFrame { size, max }.into());
    }

    let message = str::from_utf8(&frame.payload).map_err(DecodeError::from)?;
    tracing::debug!(len = message.len(), "text frame decoded");
    Ok(message.to_owned())
}

impl Decoder for FrameDecoder {
    type Item = String;
    type Error = io::Error;

    /// Decode at most one message from `src`.
    ///
    /// Bytes of an unfinished frame are moved into the decoder, so `src` is
    /// left empty whenever `Ok(None)` is returned. Per-frame errors surface as
    /// [`io::ErrorKind::InvalidData`] after the decoder has returned to a
    /// frame boundary.
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let Scan { consumed, outcome } = self.scan(src);
        src.advance(consumed);
        match outcome {
            Some(Ok(message)) => Ok(Some(message)),
            Some(Err(err)) => {
                self.log_dropped(&err);
                Err(err.into())
            }
            None => Ok(None),
        }
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if let Some(message) = self.decode(src)? {
            return Ok(Some(message));
        }

        // Report a truncated frame once; the stream is over either way.
        let result = self.finish();
        self.reset();
        result
            .map(|()| None)
            .map_err(|err| CodecError::from(err).into())
    }
}
