#![doc(html_root_url = "https://docs.rs/draft75/latest")]
//! Public API for the `draft75` library.
//!
//! This crate implements the legacy draft-75 WebSocket framing: an
//! incremental decoder that turns arbitrarily chunked socket input into text
//! messages, and an encoder for outbound text frames. Connection handling and
//! the opening handshake are left to the caller.

pub mod codec;
pub mod config;

pub use codec::{
    CodecError,
    DecodeError,
    EofError,
    FrameCodec,
    FrameDecoder,
    FrameEncoder,
    FramingError,
    MessageReceiver,
    RecoveryPolicy,
    encode,
};
pub use config::CodecConfig;
