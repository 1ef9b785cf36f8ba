//! Utilities for exercising [`draft75`] decoders in tests.
//!
//! The helpers build wire bytes by hand, feed them through a decoder in
//! arbitrary chunk sizes, and drive `FramedRead` over an in-memory
//! `tokio::io::duplex` stream.
//!
//! ```rust
//! use draft75_testing::{decode_in_chunks, text_frame};
//!
//! let wire = text_frame(0x00, b"Hello");
//! let outcomes = decode_in_chunks(&wire, 2);
//! assert!(matches!(outcomes.as_slice(), [Ok(text)] if text == "Hello"));
//! ```

pub mod helpers;
pub mod logging;

pub use helpers::{
    DEFAULT_CAPACITY,
    decode_in_chunks,
    decode_messages,
    length_frame,
    read_framed,
    text_frame,
};
pub use logging::{LoggerHandle, logger};
