//! Wire builders and decoder drivers.

use std::io;

use bytes::BytesMut;
use draft75::{
    CodecError,
    FrameDecoder,
    codec::{LENGTH_FRAME_FLAG, SENTINEL, length::write_length},
};
use futures::StreamExt;
use tokio::io::{AsyncWriteExt, duplex};
use tokio_util::codec::FramedRead;

/// Duplex buffer size used by [`read_framed`] callers that have no
/// preference.
pub const DEFAULT_CAPACITY: usize = 4096;

/// Build a text frame with an arbitrary leading byte.
///
/// `lead` should have its high bit clear; `payload` is written verbatim, so
/// invalid UTF-8 can be injected.
#[must_use]
pub fn text_frame(lead: u8, payload: &[u8]) -> Vec<u8> {
    let mut wire = Vec::with_capacity(payload.len() + 2);
    wire.push(lead);
    wire.extend_from_slice(payload);
    wire.push(SENTINEL);
    wire
}

/// Build a length-prefixed frame carrying `payload`.
///
/// The high bit is forced on `lead` so the result is always a skip frame.
#[must_use]
pub fn length_frame(lead: u8, payload: &[u8]) -> Vec<u8> {
    let mut wire = BytesMut::with_capacity(payload.len() + 11);
    wire.extend_from_slice(&[lead | LENGTH_FRAME_FLAG]);
    write_length(payload.len(), &mut wire);
    wire.extend_from_slice(payload);
    wire.to_vec()
}

/// Feed `wire` to a fresh decoder `chunk_size` bytes at a time.
///
/// A `chunk_size` of zero is treated as one.
#[must_use]
pub fn decode_in_chunks(wire: &[u8], chunk_size: usize) -> Vec<Result<String, CodecError>> {
    let mut decoder = FrameDecoder::new();
    let mut outcomes = Vec::new();
    for chunk in wire.chunks(chunk_size.max(1)) {
        decoder.ingest(chunk, &mut outcomes);
    }
    outcomes
}

/// Decode `wire` in one call and return every message.
///
/// # Errors
///
/// Returns the first per-frame error, or the end-of-stream error if `wire`
/// stops inside a frame.
pub fn decode_messages(wire: &[u8]) -> Result<Vec<String>, CodecError> {
    let mut decoder = FrameDecoder::new();
    let mut outcomes = Vec::new();
    decoder.ingest(wire, &mut outcomes);
    decoder.finish()?;
    outcomes.into_iter().collect()
}

/// Write `chunks` into one half of a duplex stream and decode the other half
/// with `decoder` inside a `FramedRead`.
///
/// Each chunk is a separate write, so frame boundaries need not line up with
/// reads. Stops at end of stream or at the first error.
///
/// # Errors
///
/// Returns the first error yielded by the framed stream, or any I/O error
/// from the writing side.
pub async fn read_framed(
    chunks: Vec<Vec<u8>>,
    decoder: FrameDecoder,
    capacity: usize,
) -> io::Result<Vec<String>> {
    let (mut client, server) = duplex(capacity);

    let writer = async move {
        for chunk in &chunks {
            client.write_all(chunk).await?;
        }
        client.shutdown().await
    };

    let reader = async move {
        let mut framed = FramedRead::new(server, decoder);
        let mut messages = Vec::new();
        while let Some(message) = framed.next().await {
            messages.push(message?);
        }
        io::Result::Ok(messages)
    };

    let ((), messages) = tokio::try_join!(writer, reader)?;
    Ok(messages)
}
