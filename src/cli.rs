//! Command line interface for the `draft75` binary.
//!
//! Frames text for the wire and decodes wire bytes back into messages.

use clap::{Args, Parser, Subcommand};

/// Largest payload accepted by `encode --skip-frame`.
pub const MAX_SKIP_FRAME: i64 = 16 * 1024 * 1024;

/// Command line arguments for the `draft75` binary.
#[derive(Debug, Parser)]
#[command(name = "draft75", version, about = "Encode and decode draft-75 WebSocket frames")]
pub struct Cli {
    /// Operation to perform.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported operations.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write one text frame per argument to stdout.
    Encode(EncodeArgs),
    /// Read frames from stdin and print each message on its own line.
    Decode(DecodeArgs),
}

/// Arguments for `draft75 encode`.
#[derive(Debug, Args)]
pub struct EncodeArgs {
    /// Prepend a length-prefixed frame carrying this many zero bytes (at most
    /// 16 MiB).
    #[arg(long, value_name = "LEN", value_parser = clap::value_parser!(u32).range(..=MAX_SKIP_FRAME))]
    pub skip_frame: Option<u32>,

    /// Messages to frame.
    #[arg(required = true)]
    pub messages: Vec<String>,
}

/// Arguments for `draft75 decode`.
#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// Largest number of bytes handed to the decoder per read.
    #[arg(long, default_value_t = 4096, value_parser = clap::value_parser!(u16).range(1..))]
    pub chunk_size: u16,

    /// Report text frames longer than this many bytes instead of printing them.
    #[arg(long, value_name = "LEN")]
    pub max_frame_length: Option<usize>,
}
