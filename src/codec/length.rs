//! Base-128 length fields carried by length-prefixed frames.
//!
//! A length field is a run of bytes, most significant group first. Each byte
//! contributes its low seven bits to the value; a set high bit means another
//! length byte follows. The first byte with the high bit clear ends the field.

use bytes::BufMut;

const CONTINUATION: u8 = 0x80;
const VALUE_MASK: u8 = 0x7F;

/// Largest number of seven-bit groups needed to express a `u64`.
const MAX_GROUPS: usize = 10;

/// Result of feeding one byte to a [`LengthAccumulator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthProgress {
    /// The byte carried the continuation bit; more length bytes follow.
    Incomplete,
    /// The field is complete and declares this many payload bytes.
    Complete(usize),
}

/// Incremental reader for a base-128 length field.
///
/// The accumulator survives across input chunks, so a length field split over
/// several reads is assembled exactly as if it had arrived at once.
///
/// # Examples
///
/// ```
/// use draft75::codec::length::{LengthAccumulator, LengthProgress};
///
/// let mut length = LengthAccumulator::new();
/// assert_eq!(length.push(0x81), LengthProgress::Incomplete);
/// assert_eq!(length.push(0x00), LengthProgress::Complete(128));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LengthAccumulator {
    value: usize,
    bytes_read: usize,
    saturated: bool,
}

impl LengthAccumulator {
    /// Create an accumulator that has not read any length bytes.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: 0,
            bytes_read: 0,
            saturated: false,
        }
    }

    /// Feed the next length byte.
    ///
    /// Values beyond `usize::MAX` saturate instead of wrapping; check
    /// [`is_saturated`](Self::is_saturated) once the field completes.
    pub fn push(&mut self, byte: u8) -> LengthProgress {
        self.bytes_read = self.bytes_read.saturating_add(1);
        match self
            .value
            .checked_mul(128)
            .and_then(|value| value.checked_add(usize::from(byte & VALUE_MASK)))
        {
            Some(value) => self.value = value,
            None => {
                self.value = usize::MAX;
                self.saturated = true;
            }
        }

        if byte & CONTINUATION == 0 {
            LengthProgress::Complete(self.value)
        } else {
            LengthProgress::Incomplete
        }
    }

    /// Number of length bytes consumed so far.
    #[must_use]
    pub fn bytes_read(&self) -> usize { self.bytes_read }

    /// Whether the declared length overflowed `usize`.
    #[must_use]
    pub fn is_saturated(&self) -> bool { self.saturated }
}

/// Write `len` as a base-128 length field.
///
/// The output is the shortest field that [`LengthAccumulator`] reads back as
/// `len`. Zero is written as a single `0x00` byte.
///
/// # Examples
///
/// ```
/// use bytes::BytesMut;
/// use draft75::codec::length::write_length;
///
/// let mut buf = BytesMut::new();
/// write_length(300, &mut buf);
/// assert_eq!(&buf[..], &[0x82, 0x2c]);
/// ```
pub fn write_length(len: usize, dst: &mut impl BufMut) {
    let mut groups = [0_u8; MAX_GROUPS];
    let mut count = 0;
    let mut rest = len;
    for slot in &mut groups {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "masked to seven bits before narrowing"
        )]
        let group = (rest & usize::from(VALUE_MASK)) as u8;
        *slot = group;
        count += 1;
        rest >>= 7;
        if rest == 0 {
            break;
        }
    }

    let (last, leading) = groups[..count]
        .split_first()
        .map_or((0, &[][..]), |(last, leading)| (*last, leading));
    for group in leading.iter().rev() {
        dst.put_u8(group | CONTINUATION);
    }
    dst.put_u8(last);
}
