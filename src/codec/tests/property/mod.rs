//! Property-oriented tests for chunk invariance and round-tripping.

mod chunking;
mod round_trip;
mod shared;
