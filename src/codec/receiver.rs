//! Destinations for decoded messages.
//!
//! [`FrameDecoder::ingest`](crate::codec::FrameDecoder::ingest) hands every
//! completed frame to a [`MessageReceiver`]: a decoded text message, or the
//! per-frame error that replaced it.

use super::CodecError;

/// Receives the outcome of each completed frame, in completion order.
///
/// # Examples
///
/// ```
/// use draft75::codec::{FrameDecoder, MessageReceiver};
///
/// #[derive(Default)]
/// struct Counter(usize);
///
/// impl MessageReceiver for Counter {
///     fn receive(&mut self, _message: String) { self.0 += 1; }
/// }
///
/// let mut counter = Counter::default();
/// FrameDecoder::new().ingest(&[0x00, b'h', b'i', 0xff, 0x00, 0xff], &mut counter);
/// assert_eq!(counter.0, 2);
/// ```
pub trait MessageReceiver {
    /// Called with the decoded text of a completed frame.
    fn receive(&mut self, message: String);

    /// Called when a completed frame could not be delivered.
    ///
    /// The decoder has already logged the error and returned to a frame
    /// boundary. The default implementation discards it.
    fn receive_error(&mut self, error: CodecError) { let _ = error; }
}

impl<R: MessageReceiver + ?Sized> MessageReceiver for &mut R {
    fn receive(&mut self, message: String) { (**self).receive(message); }

    fn receive_error(&mut self, error: CodecError) { (**self).receive_error(error); }
}

/// Queue of outcomes, appended in completion order.
impl MessageReceiver for Vec<Result<String, CodecError>> {
    fn receive(&mut self, message: String) { self.push(Ok(message)); }

    fn receive_error(&mut self, error: CodecError) { self.push(Err(error)); }
}

/// Receiver backed by a closure; see [`from_fn`].
#[derive(Clone, Debug)]
pub struct FnReceiver<F>(F);

/// Build a receiver that forwards every outcome to `handler`.
///
/// # Examples
///
/// ```
/// use draft75::codec::{FrameDecoder, receiver};
///
/// let mut seen = Vec::new();
/// let mut decoder = FrameDecoder::new();
/// decoder.ingest(
///     &[0x00, b'o', b'k', 0xff],
///     &mut receiver::from_fn(|outcome| seen.push(outcome.ok())),
/// );
/// assert_eq!(seen, vec![Some("ok".to_owned())]);
/// ```
pub fn from_fn<F>(handler: F) -> FnReceiver<F>
where
    F: FnMut(Result<String, CodecError>),
{
    FnReceiver(handler)
}

impl<F> MessageReceiver for FnReceiver<F>
where
    F: FnMut(Result<String, CodecError>),
{
    fn receive(&mut self, message: String) { (self.0)(Ok(message)); }

    fn receive_error(&mut self, error: CodecError) { (self.0)(Err(error)); }
}
