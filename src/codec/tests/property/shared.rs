//! Shared proptest helpers for codec property tests.

use std::ops::Range;

use bytes::BytesMut;
use proptest::{
    collection::vec,
    prelude::{Strategy, any, prop_oneof},
    test_runner::{Config as ProptestConfig, RngAlgorithm, TestRng, TestRunner},
};

use crate::codec::{CodecError, FrameDecoder, LENGTH_FRAME_FLAG, SENTINEL, encode_into, length};

pub fn deterministic_runner(cases: u32) -> TestRunner {
    let config = ProptestConfig {
        cases,
        ..ProptestConfig::default()
    };
    let rng = TestRng::deterministic_rng(RngAlgorithm::ChaCha);
    TestRunner::new_with_rng(config, rng)
}

/// One frame as it appears on the wire.
#[derive(Clone, Debug)]
pub enum WireFrame {
    /// Text frame produced by the encoder.
    Text(String),
    /// Text frame with an arbitrary low leading byte and raw payload.
    RawText { lead: u8, payload: Vec<u8> },
    /// Length-prefixed frame that the decoder skips.
    Skip { lead: u8, payload: Vec<u8> },
}

impl WireFrame {
    pub fn write(&self, dst: &mut BytesMut) {
        match self {
            Self::Text(text) => encode_into(text, dst),
            Self::RawText { lead, payload } => {
                dst.extend_from_slice(&[*lead]);
                dst.extend_from_slice(payload);
                dst.extend_from_slice(&[SENTINEL]);
            }
            Self::Skip { lead, payload } => {
                dst.extend_from_slice(&[*lead]);
                length::write_length(payload.len(), dst);
                dst.extend_from_slice(payload);
            }
        }
    }

    /// Text the decoder should deliver for this frame, if any.
    pub fn expected_text(&self) -> Option<Option<String>> {
        match self {
            Self::Text(text) => Some(Some(text.clone())),
            Self::RawText { payload, .. } => Some(String::from_utf8(payload.clone()).ok()),
            Self::Skip { .. } => None,
        }
    }
}

pub fn skip_frame_strategy() -> impl Strategy<Value = WireFrame> {
    (LENGTH_FRAME_FLAG..=u8::MAX, vec(any::<u8>(), 0..300))
        .prop_map(|(lead, payload)| WireFrame::Skip { lead, payload })
}

pub fn wire_frame_strategy() -> impl Strategy<Value = WireFrame> {
    let text = any::<String>().prop_map(WireFrame::Text);
    let raw_text = (0u8..LENGTH_FRAME_FLAG, vec(0u8..SENTINEL, 0..64))
        .prop_map(|(lead, payload)| WireFrame::RawText { lead, payload });

    prop_oneof![text, raw_text, skip_frame_strategy()]
}

pub fn wire_frames_strategy(frames: Range<usize>) -> impl Strategy<Value = Vec<WireFrame>> {
    vec(wire_frame_strategy(), frames)
}

pub fn chunk_sizes_strategy() -> impl Strategy<Value = Vec<usize>> { vec(1usize..32, 1..16) }

pub fn to_wire(frames: &[WireFrame]) -> Vec<u8> {
    let mut wire = BytesMut::new();
    for frame in frames {
        frame.write(&mut wire);
    }
    wire.to_vec()
}

/// Split `bytes` into consecutive chunks, cycling through `sizes`.
pub fn split_by_sizes<'a>(bytes: &'a [u8], sizes: &[usize]) -> Vec<&'a [u8]> {
    let mut chunks = Vec::new();
    let mut rest = bytes;
    for &size in sizes.iter().cycle() {
        if rest.is_empty() {
            break;
        }
        let (chunk, tail) = rest.split_at(size.clamp(1, rest.len()));
        chunks.push(chunk);
        rest = tail;
    }
    chunks
}

/// Outcome of a frame with errors flattened to their messages for comparison.
pub type Outcome = Result<String, String>;

pub fn decode_chunks(decoder: &mut FrameDecoder, chunks: &[&[u8]]) -> Vec<Outcome> {
    let mut outcomes: Vec<Result<String, CodecError>> = Vec::new();
    for chunk in chunks {
        decoder.ingest(chunk, &mut outcomes);
    }
    outcomes
        .into_iter()
        .map(|outcome| outcome.map_err(|err| err.to_string()))
        .collect()
}
