//! Errors returned by the hashing API.
//!
//! Everything here is a caller-contract fault: the hash itself is pure
//! computation and has no transient failure modes. Operations validate before
//! touching the sponge, so a rejected call leaves the instance as it was.

/// An error raised while configuring or driving a [`Sha3`](crate::sha3::Sha3) instance.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	/// The requested digest length is not one of 224, 256, 384 or 512 bits.
	#[error("unsupported digest length of {bits} bits, expected 224, 256, 384 or 512")]
	UnsupportedBitLength {
		/// The rejected length.
		bits: u32,
	},
	/// An algorithm name did not resolve to any supported variant.
	#[error("unknown hash algorithm name")]
	UnknownAlgorithm,
	/// `offset + length` runs past the end of the input buffer.
	#[error("range {offset}+{length} is out of bounds for a buffer of {available} bytes")]
	OutOfBounds {
		offset: usize,
		length: usize,
		available: usize,
	},
	/// The session already produced its digest; reset before reusing the instance.
	#[error("hash already finalized, reset before reuse")]
	Finalized,
	/// The staging buffer held a whole block on entry to absorb.
	#[error("internal staging buffer is unexpectedly full")]
	BufferFull,
	/// The padding mode can only change before the first absorb of a session.
	#[error("padding mode cannot change once absorbing has started")]
	PaddingLocked,
}
