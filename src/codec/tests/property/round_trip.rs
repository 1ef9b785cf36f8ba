//! Generated round trips through the encoder and decoder.

use bytes::BytesMut;
use proptest::{
    collection::vec,
    prelude::any,
    prop_assert,
    prop_assert_eq,
    test_runner::TestCaseError,
};
use rstest::rstest;
use tokio_util::codec::{Decoder, Encoder};

use super::shared::{
    chunk_sizes_strategy,
    decode_chunks,
    deterministic_runner,
    split_by_sizes,
};
use crate::codec::{FrameCodec, FrameDecoder, encode};

#[test]
fn generated_text_round_trips() {
    let mut runner = deterministic_runner(256);

    runner
        .run(&any::<String>(), |text| {
            let wire = encode(&text);
            let mut decoder = FrameDecoder::new();

            prop_assert_eq!(decode_chunks(&mut decoder, &[&wire[..]]), vec![Ok(text)]);
            prop_assert!(decoder.is_idle());
            Ok(())
        })
        .expect("encoded text should decode to itself");
}

#[rstest]
#[case(1..4, 96)]
#[case(4..32, 64)]
fn generated_message_sequences_round_trip_through_adapters(
    #[case] messages: std::ops::Range<usize>,
    #[case] cases: u32,
) {
    let mut runner = deterministic_runner(cases);
    let strategy = (vec(any::<String>(), messages), chunk_sizes_strategy());

    runner
        .run(&strategy, |(messages, sizes)| {
            let codec = FrameCodec::default();
            let mut encoder = codec.encoder();
            let mut decoder = codec.decoder();

            let mut wire = BytesMut::new();
            for message in &messages {
                encoder
                    .encode(message.as_str(), &mut wire)
                    .map_err(|err| TestCaseError::fail(format!("encode failed: {err}")))?;
            }

            let mut decoded = Vec::new();
            let mut buffer = BytesMut::new();
            for chunk in split_by_sizes(&wire, &sizes) {
                buffer.extend_from_slice(chunk);
                while let Some(message) = decoder
                    .decode(&mut buffer)
                    .map_err(|err| TestCaseError::fail(format!("decode failed: {err}")))?
                {
                    decoded.push(message);
                }
            }

            prop_assert_eq!(decoded, messages);
            prop_assert!(buffer.is_empty());
            Ok(())
        })
        .expect("generated message sequences should round-trip");
}
