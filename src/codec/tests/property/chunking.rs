//! Generated checks that chunk boundaries never change decoded output.

use proptest::{collection::vec, prelude::any, prop_assert, prop_assert_eq};
use rstest::rstest;

use super::shared::{
    chunk_sizes_strategy,
    decode_chunks,
    deterministic_runner,
    skip_frame_strategy,
    split_by_sizes,
    to_wire,
    wire_frames_strategy,
};
use crate::{CodecConfig, codec::FrameDecoder};

fn quiet_decoder() -> FrameDecoder { quiet_decoder_with(CodecConfig::default()) }

fn quiet_decoder_with(config: CodecConfig) -> FrameDecoder {
    FrameDecoder::with_config(config.log_dropped_frames(false))
}

#[rstest]
#[case::unbounded(CodecConfig::default(), 128)]
#[case::unbounded_long(CodecConfig::default(), 256)]
#[case::bounded(CodecConfig::default().max_frame_length(64), 256)]
fn arbitrary_bytes_decode_identically_in_any_partition(
    #[case] config: CodecConfig,
    #[case] cases: u32,
) {
    let mut runner = deterministic_runner(cases);
    let strategy = (vec(any::<u8>(), 0..512), chunk_sizes_strategy());

    runner
        .run(&strategy, |(bytes, sizes)| {
            let mut whole = quiet_decoder_with(config.clone());
            let expected = decode_chunks(&mut whole, &[bytes.as_slice()]);

            let mut chunked = quiet_decoder_with(config.clone());
            let actual = decode_chunks(&mut chunked, &split_by_sizes(&bytes, &sizes));

            prop_assert_eq!(actual, expected);
            prop_assert_eq!(chunked.finish(), whole.finish());
            prop_assert_eq!(chunked.buffered_len(), whole.buffered_len());
            Ok(())
        })
        .expect("decoding should not depend on chunk boundaries");
}

#[rstest]
#[case(1..8, 96)]
#[case(8..24, 64)]
fn generated_frames_decode_in_order(
    #[case] frames: std::ops::Range<usize>,
    #[case] cases: u32,
) {
    let mut runner = deterministic_runner(cases);
    let strategy = (wire_frames_strategy(frames), chunk_sizes_strategy());

    runner
        .run(&strategy, |(frames, sizes)| {
            let wire = to_wire(&frames);
            let expected: Vec<Option<String>> =
                frames.iter().filter_map(|frame| frame.expected_text()).collect();

            let mut decoder = quiet_decoder();
            let actual: Vec<Option<String>> =
                decode_chunks(&mut decoder, &split_by_sizes(&wire, &sizes))
                    .into_iter()
                    .map(Result::ok)
                    .collect();

            prop_assert_eq!(actual, expected);
            prop_assert!(decoder.is_idle());
            Ok(())
        })
        .expect("generated frames should decode in order");
}

#[test]
fn skipped_frames_emit_nothing() {
    let mut runner = deterministic_runner(128);
    let strategy = (vec(skip_frame_strategy(), 1..6), chunk_sizes_strategy());

    runner
        .run(&strategy, |(frames, sizes)| {
            let wire = to_wire(&frames);
            let mut decoder = quiet_decoder();
            let outcomes = decode_chunks(&mut decoder, &split_by_sizes(&wire, &sizes));

            prop_assert!(outcomes.is_empty());
            prop_assert!(decoder.is_idle());
            Ok(())
        })
        .expect("length-prefixed frames should be skipped");
}
