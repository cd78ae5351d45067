//! An implementation of [SHA-3](https://en.wikipedia.org/wiki/SHA-3), plus the
//! padding of the original Keccak submission, as a streaming hasher.
//!
//! ```
//! use libsha3::sha3::{Sha3, Variant};
//!
//! let mut hasher = Sha3::new(Variant::Sha3_256);
//! hasher.absorb(b"Hel")?;
//! hasher.absorb(b"lo")?;
//!
//! let digest = hasher.finalize()?;
//! assert_eq!(digest, libsha3::sha3::sha3_256(b"Hello"));
//! # Ok::<(), libsha3::Error>(())
//! ```

use core::fmt;
use core::ops::Deref;
use core::str::FromStr;

use tracing::{debug, trace};

use super::{absorb_block, LaneState};
use crate::error::Error;

const MAX_RATE: usize = 144;
const MAX_DIGEST_LEN: usize = 64;

/// One of the four standard output lengths, each with its own rate.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Variant {
	Sha3_224,
	#[default]
	Sha3_256,
	Sha3_384,
	Sha3_512,
}

impl Variant {
	pub const ALL: [Variant; 4] = [
		Variant::Sha3_224,
		Variant::Sha3_256,
		Variant::Sha3_384,
		Variant::Sha3_512,
	];

	pub fn from_bits(bits: u32) -> Result<Self, Error> {
		match bits {
			224 => Ok(Variant::Sha3_224),
			256 => Ok(Variant::Sha3_256),
			384 => Ok(Variant::Sha3_384),
			512 => Ok(Variant::Sha3_512),
			_ => Err(Error::UnsupportedBitLength {bits}),
		}
	}

	pub const fn bits(self) -> u32 {
		match self {
			Variant::Sha3_224 => 224,
			Variant::Sha3_256 => 256,
			Variant::Sha3_384 => 384,
			Variant::Sha3_512 => 512,
		}
	}

	pub const fn digest_len(self) -> usize {
		self.bits() as usize / 8
	}

	/// Bytes absorbed per permutation: `(1600 - 2 * bits) / 8`.
	pub const fn rate(self) -> usize {
		(1600 - 2 * self.bits() as usize) / 8
	}
}

// names are compared with case and hyphens ignored, so "SHA3-256",
// "sha3256" and "Sha3-256-Managed" all land on the same variant
const NAMES: [(&str, Variant); 9] = [
	("sha3", Variant::Sha3_256),
	("sha3224", Variant::Sha3_224),
	("sha3224managed", Variant::Sha3_224),
	("sha3256", Variant::Sha3_256),
	("sha3256managed", Variant::Sha3_256),
	("sha3384", Variant::Sha3_384),
	("sha3384managed", Variant::Sha3_384),
	("sha3512", Variant::Sha3_512),
	("sha3512managed", Variant::Sha3_512),
];

impl FromStr for Variant {
	type Err = Error;

	fn from_str(name: &str) -> Result<Self, Error> {
		let normalized = || {
			name.bytes()
				.filter(|&byte| byte != b'-')
				.map(|byte| byte.to_ascii_lowercase())
		};

		NAMES
			.iter()
			.find(|(canonical, _)| normalized().eq(canonical.bytes()))
			.map(|&(_, variant)| variant)
			.ok_or(Error::UnknownAlgorithm)
	}
}

impl fmt::Display for Variant {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "SHA3-{}", self.bits())
	}
}

/// The domain separation applied when the final block is padded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Padding {
	/// The original Keccak submission, delimiter byte `0x01`.
	Keccak,
	/// FIPS 202, delimiter byte `0x06`.
	#[default]
	Sha3,
}

impl Padding {
	pub const fn delimiter(self) -> u8 {
		match self {
			Padding::Keccak => 0x01,
			Padding::Sha3 => 0x06,
		}
	}
}

/// A finished hash. Derefs to the digest bytes.
#[derive(Clone, Copy)]
pub struct Digest {
	bytes: [u8; MAX_DIGEST_LEN],
	len: usize,
}

impl Digest {
	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes[.. self.len]
	}
}

impl Deref for Digest {
	type Target = [u8];

	fn deref(&self) -> &[u8] {
		self.as_bytes()
	}
}

impl AsRef<[u8]> for Digest {
	fn as_ref(&self) -> &[u8] {
		self.as_bytes()
	}
}

impl PartialEq for Digest {
	fn eq(&self, other: &Self) -> bool {
		self.as_bytes() == other.as_bytes()
	}
}

impl Eq for Digest {}

impl<const N: usize> PartialEq<[u8; N]> for Digest {
	fn eq(&self, other: &[u8; N]) -> bool {
		self.as_bytes() == other
	}
}

impl fmt::LowerHex for Digest {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		for byte in self.as_bytes() {
			write!(f, "{:>02x}", byte)?;
		}

		Ok(())
	}
}

impl fmt::Debug for Digest {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "Digest({:x})", self)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
	Ready,
	Absorbing,
	Finalized,
}

/// Streaming SHA-3 / Keccak hasher.
///
/// A session is any number of [`absorb`](Self::absorb) calls followed by one
/// [`finalize`](Self::finalize). After that the instance refuses further input
/// until [`reset`](Self::reset) is called.
#[derive(Clone)]
pub struct Sha3 {
	variant: Variant,
	padding: Padding,
	state: LaneState,
	// only the first `variant.rate()` bytes are ever used
	buffer: [u8; MAX_RATE],
	buffer_len: usize,
	phase: Phase,
}

impl Sha3 {
	/// A hasher with standard SHA-3 padding.
	pub fn new(variant: Variant) -> Self {
		Self::with_padding(variant, Padding::Sha3)
	}

	/// A hasher with the original Keccak padding.
	pub fn keccak(variant: Variant) -> Self {
		Self::with_padding(variant, Padding::Keccak)
	}

	pub fn with_padding(variant: Variant, padding: Padding) -> Self {
		trace!(%variant, ?padding, "new sha3 instance");

		Self {
			variant,
			padding,
			state: [0; 25],
			buffer: [0; MAX_RATE],
			buffer_len: 0,
			phase: Phase::Ready,
		}
	}

	/// Like [`new`](Self::new), but with the length given in bits.
	pub fn with_bits(bits: u32) -> Result<Self, Error> {
		Variant::from_bits(bits)
			.map(Self::new)
			.map_err(|err| {
				debug!(bits, "rejected digest length");
				err
			})
	}

	pub fn variant(&self) -> Variant {
		self.variant
	}

	pub fn padding(&self) -> Padding {
		self.padding
	}

	pub fn rate(&self) -> usize {
		self.variant.rate()
	}

	pub fn digest_len(&self) -> usize {
		self.variant.digest_len()
	}

	/// Switches padding mode. Only allowed before the first absorb of a session.
	pub fn set_padding(&mut self, padding: Padding) -> Result<(), Error> {
		if self.phase != Phase::Ready {
			debug!(phase = ?self.phase, "rejected padding change");
			return Err(Error::PaddingLocked);
		}

		self.padding = padding;

		Ok(())
	}

	/// Zeroes the lane state and the staging buffer, starting a new session.
	pub fn reset(&mut self) {
		self.state = [0; 25];
		self.buffer = [0; MAX_RATE];
		self.buffer_len = 0;
		self.phase = Phase::Ready;

		trace!(variant = %self.variant, "sha3 reset");
	}

	/// Feeds `bytes` into the sponge.
	pub fn absorb(&mut self, bytes: &[u8]) -> Result<(), Error> {
		self.check_open()?;

		self.phase = Phase::Absorbing;
		self.absorb_unchecked(bytes);

		Ok(())
	}

	/// Feeds `length` bytes of `buffer` starting at `offset`.
	///
	/// The range is checked before anything else happens, so an out of bounds
	/// call leaves the session untouched.
	pub fn absorb_range(&mut self, buffer: &[u8], offset: usize, length: usize) -> Result<(), Error> {
		let end = offset
			.checked_add(length)
			.filter(|&end| end <= buffer.len());

		let Some(end) = end else {
			debug!(offset, length, available = buffer.len(), "rejected absorb range");

			return Err(Error::OutOfBounds {
				offset,
				length,
				available: buffer.len(),
			});
		};

		self.absorb(&buffer[offset .. end])
	}

	/// Pads the final block, permutes once more and returns the digest.
	pub fn finalize(&mut self) -> Result<Digest, Error> {
		self.check_open()?;

		let digest = self.finalize_unchecked();
		trace!(variant = %self.variant, "sha3 finalized");

		Ok(digest)
	}

	fn check_open(&self) -> Result<(), Error> {
		if self.phase == Phase::Finalized {
			debug!(variant = %self.variant, "sha3 used after finalize");
			return Err(Error::Finalized);
		}

		if self.buffer_len >= self.rate() {
			debug!(buffer_len = self.buffer_len, "staging buffer full on entry");
			return Err(Error::BufferFull);
		}

		Ok(())
	}

	fn absorb_unchecked(&mut self, mut bytes: &[u8]) {
		if bytes.is_empty() {
			return;
		}

		let rate = self.rate();
		let lane_count = rate / 8;

		let amount = usize::min(bytes.len(), rate - self.buffer_len);
		self.buffer[self.buffer_len ..][.. amount].copy_from_slice(&bytes[.. amount]);
		self.buffer_len += amount;
		bytes = &bytes[amount ..];

		if self.buffer_len == rate {
			absorb_block(&mut self.state, &self.buffer[.. rate], lane_count);
			self.buffer_len = 0;
		}

		// whole blocks skip the staging buffer
		let mut blocks = bytes.chunks_exact(rate);

		for block in &mut blocks {
			absorb_block(&mut self.state, block, lane_count);
		}

		let rest = blocks.remainder();
		self.buffer[self.buffer_len ..][.. rest.len()].copy_from_slice(rest);
		self.buffer_len += rest.len();
	}

	fn finalize_unchecked(&mut self) -> Digest {
		let rate = self.rate();
		let buffer = &mut self.buffer[.. rate];

		buffer[self.buffer_len ..].fill(0);

		// plain assignment, the tail was just zeroed
		buffer[self.buffer_len] = self.padding.delimiter();
		buffer[rate - 1] |= 0x80;

		absorb_block(&mut self.state, buffer, rate / 8);

		self.buffer_len = 0;
		self.phase = Phase::Finalized;

		let mut bytes = [0; MAX_DIGEST_LEN];

		for (chunk, lane) in bytes.chunks_exact_mut(8).zip(self.state.iter()) {
			chunk.copy_from_slice(&lane.to_le_bytes());
		}

		let len = self.digest_len();
		bytes[len ..].fill(0);

		Digest {bytes, len}
	}
}

impl fmt::Debug for Sha3 {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("Sha3")
			.field("variant", &self.variant)
			.field("padding", &self.padding)
			.field("phase", &self.phase)
			.field("buffer_len", &self.buffer_len)
			.finish_non_exhaustive()
	}
}

#[cfg(feature = "std")]
impl std::io::Write for Sha3 {
	fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
		self.absorb(buf)
			.map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err))?;

		Ok(buf.len())
	}

	fn flush(&mut self) -> std::io::Result<()> {
		Ok(())
	}
}

/// Hashes `bytes` in one go.
pub fn digest(variant: Variant, padding: Padding, bytes: &[u8]) -> Digest {
	let mut hasher = Sha3::with_padding(variant, padding);

	// a fresh instance is always open
	hasher.absorb_unchecked(bytes);
	hasher.finalize_unchecked()
}

fn digest_array<const N: usize>(variant: Variant, bytes: &[u8]) -> [u8; N] {
	let mut out = [0; N];
	out.copy_from_slice(&digest(variant, Padding::Sha3, bytes));

	out
}

/// Returns the SHA3-224 digest of the byte slice passed to it.
pub fn sha3_224(bytes: &[u8]) -> [u8; 28] {
	digest_array(Variant::Sha3_224, bytes)
}

/// Returns the SHA3-256 digest of the byte slice passed to it.
pub fn sha3_256(bytes: &[u8]) -> [u8; 32] {
	digest_array(Variant::Sha3_256, bytes)
}

/// Returns the SHA3-384 digest of the byte slice passed to it.
pub fn sha3_384(bytes: &[u8]) -> [u8; 48] {
	digest_array(Variant::Sha3_384, bytes)
}

/// Returns the SHA3-512 digest of the byte slice passed to it.
pub fn sha3_512(bytes: &[u8]) -> [u8; 64] {
	digest_array(Variant::Sha3_512, bytes)
}

#[cfg(test)]
use hex_literal::hex;

#[cfg(test)]
fn pattern(len: usize) -> [u8; 512] {
	let mut out = [0; 512];

	for (i, byte) in out[.. len].iter_mut().enumerate() {
		*byte = (i % 251) as u8;
	}

	out
}

#[test]
fn test_empty_inputs() {
	assert_eq!(
		sha3_224(b""),
		hex!("6b4e03423667dbb73b6e15454f0eb1abd4597f9a1b078e3f5b5a6bc7"),
	);

	assert_eq!(
		sha3_256(b""),
		hex!("a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"),
	);

	assert_eq!(
		sha3_384(b""),
		hex!("0c63a75b845e4f7d01107d852e4c2485c51a50aaaa94fc61995e71bbee983a2ac3713831264adb47fb6bd1e058d5f004"),
	);

	assert_eq!(
		sha3_512(b""),
		hex!("a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a615b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26"),
	);
}

#[test]
fn test_abc_inputs() {
	assert_eq!(
		sha3_224(b"abc"),
		hex!("e642824c3f8cf24ad09234ee7d3c766fc9a3a5168d0c94ad73b46fdf"),
	);

	assert_eq!(
		sha3_256(b"abc"),
		hex!("3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"),
	);

	assert_eq!(
		sha3_384(b"abc"),
		hex!("ec01498288516fc926459f58e2c6ad8df9b473cb0fc08c2596da7cf0e49be4b298d88cea927ac7f539f1edf228376d25"),
	);

	assert_eq!(
		sha3_512(b"abc"),
		hex!("b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0"),
	);
}

#[test]
fn test_hello() {
	let mut hasher = Sha3::new(Variant::Sha3_256);
	hasher.absorb(b"Hello").unwrap();

	assert_eq!(
		hasher.finalize().unwrap(),
		hex!("8ca66ee6b2fe4bb928a8e3cd2f508de4119c0895f22e011117e22cf9b13de7ef"),
	);
}

#[test]
fn test_keccak_padding() {
	assert_eq!(
		digest(Variant::Sha3_256, Padding::Keccak, b""),
		hex!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"),
	);

	assert_eq!(
		digest(Variant::Sha3_256, Padding::Keccak, b"abc"),
		hex!("4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45"),
	);

	assert_eq!(
		digest(Variant::Sha3_512, Padding::Keccak, b""),
		hex!("0eab42de4c3ceb9235fc91acffe746b29c29a8c366b7c60e4e67c466f36a4304c00fa9caf9d87976ba469bcbe06713b435f091ef2769fb160cdab33d3670680e"),
	);

	let mut hasher = Sha3::keccak(Variant::Sha3_224);
	hasher.absorb(b"Hello").unwrap();

	assert_eq!(
		hasher.finalize().unwrap(),
		hex!("2a2543591ab61b478869d18143de26f24e38e9e65e666da819683a55"),
	);
}

#[test]
fn padding_modes_differ() {
	let long = pattern(300);
	let inputs: [&[u8]; 3] = [b"", b"abc", &long[.. 300]];

	for variant in Variant::ALL {
		for input in inputs {
			assert_ne!(
				digest(variant, Padding::Sha3, input),
				digest(variant, Padding::Keccak, input),
			);
		}
	}
}

#[test]
fn digest_length_is_fixed() {
	for variant in Variant::ALL {
		for len in [0, 1, variant.rate(), 3 * variant.rate() + 5] {
			let input = pattern(len);
			let digest = digest(variant, Padding::Sha3, &input[.. len]);

			assert_eq!(digest.len(), variant.digest_len());
		}
	}
}

#[test]
fn block_boundaries() {
	// SHA3-256 has a rate of 136 bytes
	let cases: [(usize, [u8; 32]); 3] = [
		(135, hex!("fded8fd9d6551c601eeb3b7c6bc5e5cfd8aad1d015b7e9aaa9c9b9475231d5e2")),
		(136, hex!("cf3ccff92480a29160c2d38317c430e14749bfee1788106957dfe73f8c4930e5")),
		(137, hex!("ce9d7dc90913ee5d92745019479a5352c6d6279bef18ed07dc0a83ee8084daca")),
	];

	for (len, expected) in cases {
		let input = pattern(len);
		assert_eq!(sha3_256(&input[.. len]), expected, "length {}", len);
	}
}

#[test]
fn chunking_is_invisible() {
	let input = pattern(500);

	for variant in Variant::ALL {
		let expected = digest(variant, Padding::Sha3, &input[.. 500]);

		for chunk_size in [1, 7, 8, variant.rate() - 1, variant.rate(), variant.rate() + 1, 500] {
			let mut hasher = Sha3::new(variant);

			for chunk in input[.. 500].chunks(chunk_size) {
				hasher.absorb(chunk).unwrap();
			}

			assert_eq!(hasher.finalize().unwrap(), expected, "{} chunks of {}", variant, chunk_size);
		}
	}
}

#[test]
fn reset_matches_fresh_instance() {
	let mut reused = Sha3::new(Variant::Sha3_384);
	reused.absorb(b"first input, long enough to be worth forgetting").unwrap();
	reused.finalize().unwrap();

	reused.reset();
	reused.absorb(b"abc").unwrap();

	assert_eq!(reused.finalize().unwrap(), sha3_384(b"abc"));

	// reset halfway through absorbing as well
	let mut interrupted = Sha3::new(Variant::Sha3_384);
	interrupted.absorb(&pattern(200)[.. 200]).unwrap();
	interrupted.reset();
	interrupted.absorb(b"abc").unwrap();

	assert_eq!(interrupted.finalize().unwrap(), sha3_384(b"abc"));
}

#[test]
fn finalize_requires_reset() {
	let mut hasher = Sha3::new(Variant::Sha3_256);
	hasher.finalize().unwrap();

	assert_eq!(hasher.finalize(), Err(Error::Finalized));
	assert_eq!(hasher.absorb(b"more"), Err(Error::Finalized));
	assert_eq!(hasher.absorb(b""), Err(Error::Finalized));

	hasher.reset();
	assert_eq!(hasher.finalize().unwrap(), sha3_256(b""));
}

#[test]
fn absorb_range_checks_bounds() {
	let input = b"0123456789";
	let mut hasher = Sha3::new(Variant::Sha3_256);

	assert_eq!(
		hasher.absorb_range(input, 8, 3),
		Err(Error::OutOfBounds {offset: 8, length: 3, available: 10}),
	);

	assert_eq!(
		hasher.absorb_range(input, usize::MAX, 2),
		Err(Error::OutOfBounds {offset: usize::MAX, length: 2, available: 10}),
	);

	// the rejected calls left the session untouched
	hasher.absorb_range(input, 2, 3).unwrap();
	hasher.absorb_range(input, 10, 0).unwrap();

	assert_eq!(hasher.finalize().unwrap(), sha3_256(b"234"));
}

#[test]
fn padding_locks_after_first_absorb() {
	let mut hasher = Sha3::new(Variant::Sha3_256);
	hasher.set_padding(Padding::Keccak).unwrap();
	hasher.absorb(b"").unwrap();

	assert_eq!(hasher.set_padding(Padding::Sha3), Err(Error::PaddingLocked));
	assert_eq!(hasher.padding(), Padding::Keccak);
	assert_eq!(hasher.finalize().unwrap(), digest(Variant::Sha3_256, Padding::Keccak, b""));

	hasher.reset();
	hasher.set_padding(Padding::Sha3).unwrap();
}

#[test]
fn full_staging_buffer_is_rejected() {
	let mut hasher = Sha3::new(Variant::Sha3_512);
	hasher.buffer_len = hasher.rate();

	assert_eq!(hasher.absorb(b"x"), Err(Error::BufferFull));
	assert_eq!(hasher.finalize(), Err(Error::BufferFull));
	assert_eq!(hasher.state, [0; 25]);
}

#[test]
fn variant_parameters() {
	let rates: [usize; 4] = Variant::ALL.map(Variant::rate);
	let digest_lens: [usize; 4] = Variant::ALL.map(Variant::digest_len);

	assert_eq!(rates, [144, 136, 104, 72]);
	assert_eq!(digest_lens, [28, 32, 48, 64]);

	for rate in rates {
		assert_eq!(rate % 8, 0);
	}

	assert_eq!(Variant::from_bits(384), Ok(Variant::Sha3_384));
	assert_eq!(Variant::from_bits(160), Err(Error::UnsupportedBitLength {bits: 160}));
	assert!(Sha3::with_bits(0).is_err());
	assert_eq!(Sha3::with_bits(512).unwrap().digest_len(), 64);
}

#[test]
fn variant_names() {
	assert_eq!("SHA3-224".parse(), Ok(Variant::Sha3_224));
	assert_eq!("sha3".parse(), Ok(Variant::Sha3_256));
	assert_eq!("Sha3256Managed".parse(), Ok(Variant::Sha3_256));
	assert_eq!("sha3-384".parse(), Ok(Variant::Sha3_384));
	assert_eq!("SHA3-512-managed".parse(), Ok(Variant::Sha3_512));
	assert_eq!("sha3-1024".parse::<Variant>(), Err(Error::UnknownAlgorithm));
	assert_eq!("".parse::<Variant>(), Err(Error::UnknownAlgorithm));
}

#[cfg(feature = "std")]
#[test]
fn digest_formats_as_hex() {
	let digest = digest(Variant::Sha3_224, Padding::Sha3, b"");

	assert_eq!(
		format!("{:x}", digest),
		"6b4e03423667dbb73b6e15454f0eb1abd4597f9a1b078e3f5b5a6bc7",
	);
}

#[cfg(feature = "std")]
#[test]
fn hashes_readers_through_io_write() {
	let input = pattern(400);
	let mut hasher = Sha3::new(Variant::Sha3_512);

	std::io::copy(&mut &input[.. 400], &mut hasher).unwrap();

	assert_eq!(hasher.finalize().unwrap(), sha3_512(&input[.. 400]));
}
