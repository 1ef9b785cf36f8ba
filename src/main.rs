//! `draft75` binary: frames text for the wire and decodes wire bytes.
//!
//! `encode` writes raw frames to stdout; `decode` reads raw frames from stdin
//! in fixed-size reads and prints one message per line.

mod cli;

use std::process::ExitCode;

use bytes::BytesMut;
use clap::Parser;
use draft75::{
    CodecConfig,
    CodecError,
    FrameDecoder,
    MessageReceiver,
    codec::{LENGTH_FRAME_FLAG, encode_into, length},
};
use tokio::io::{self, AsyncReadExt, AsyncWriteExt};

use crate::cli::{Cli, Command, DecodeArgs, EncodeArgs};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Diagnostics go to stderr so stdout carries only frames or messages.
    // `init` also routes `log` records from the codec into this subscriber.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Encode(args) => run_encode(args).await,
        Command::Decode(args) => run_decode(args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, error_type = err.error_type(), "draft75 failed");
            ExitCode::FAILURE
        }
    }
}

async fn run_encode(args: EncodeArgs) -> Result<(), CodecError> {
    let mut wire = BytesMut::new();
    if let Some(len) = args.skip_frame {
        write_skip_frame(len, &mut wire)?;
    }
    for message in &args.messages {
        encode_into(message, &mut wire);
    }

    let mut stdout = io::stdout();
    stdout.write_all(&wire).await?;
    stdout.flush().await?;
    Ok(())
}

/// Append a length-prefixed frame of `len` zero bytes.
fn write_skip_frame(len: u32, wire: &mut BytesMut) -> io::Result<()> {
    let too_large = || io::Error::new(io::ErrorKind::InvalidInput, "skip frame is too large");
    let len = usize::try_from(len).map_err(|_| too_large())?;
    wire.extend_from_slice(&[LENGTH_FRAME_FLAG]);
    length::write_length(len, wire);
    let end = wire.len().checked_add(len).ok_or_else(too_large)?;
    wire.resize(end, 0);
    Ok(())
}

/// Collects decoded messages as newline-terminated lines.
#[derive(Debug, Default)]
struct LineBuffer {
    lines: String,
    dropped: usize,
}

impl MessageReceiver for LineBuffer {
    fn receive(&mut self, message: String) {
        self.lines.push_str(&message);
        self.lines.push('\n');
    }

    fn receive_error(&mut self, _error: CodecError) { self.dropped += 1; }
}

async fn run_decode(args: DecodeArgs) -> Result<(), CodecError> {
    let mut config = CodecConfig::default();
    if let Some(len) = args.max_frame_length {
        config = config.max_frame_length(len);
    }

    let mut decoder = FrameDecoder::with_config(config);
    let mut output = LineBuffer::default();
    let mut stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut chunk = vec![0_u8; usize::from(args.chunk_size)];

    loop {
        let read = stdin.read(&mut chunk).await?;
        if read == 0 {
            break;
        }
        decoder.ingest(&chunk[..read], &mut output);
        stdout.write_all(output.lines.as_bytes()).await?;
        output.lines.clear();
    }
    stdout.flush().await?;

    if output.dropped > 0 {
        tracing::warn!(dropped = output.dropped, "frames could not be decoded");
    }
    decoder.finish()?;
    Ok(())
}
