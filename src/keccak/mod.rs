//! The Keccak-f\[1600\] permutation.
//!
//! The state is 25 lanes of 64 bits. Lane `(x, y)` of the 5x5 matrix lives at
//! index `x + 5 * y`, which is also the order lanes are read from and written
//! to byte strings (each lane little-endian).

mod round_constants;

use round_constants::ROUND_CONSTANTS;

mod components {
	pub mod chi;
	pub mod iota;
	pub mod pi;
	pub mod rho;
	pub mod theta;
}

use components::chi::chi;
use components::iota::iota;
use components::pi::pi;
use components::rho::rho;
use components::theta::theta;

pub mod sha3;

pub type LaneState = [u64; 25];

pub const NUM_ROUNDS: usize = 24;

/// Applies all 24 rounds of Keccak-f\[1600\] to `state` in place.
pub fn keccak_f1600(state: &mut LaneState) {
	for round in 0 .. NUM_ROUNDS {
		theta(state);
		rho(state);
		pi(state);
		chi(state);
		iota(state, round);
	}
}

/// XORs `block` into the first `lane_count` lanes, then permutes.
///
/// `block` must be exactly `lane_count * 8` bytes. Nothing is checked outside
/// of debug builds; the sponge only ever hands over whole rate-sized blocks.
pub(crate) fn absorb_block(state: &mut LaneState, block: &[u8], lane_count: usize) {
	debug_assert!(lane_count <= state.len());
	debug_assert_eq!(block.len(), lane_count * 8);

	for (lane, word) in state[.. lane_count].iter_mut().zip(block.chunks_exact(8)) {
		let mut bytes = [0; 8];
		bytes.copy_from_slice(word);
		*lane ^= u64::from_le_bytes(bytes);
	}

	keccak_f1600(state);
}

#[test]
fn zero_state_test_vector() {
	// first output of the keccak team's KeccakF-1600-IntermediateValues.txt
	let mut state = [0; 25];
	keccak_f1600(&mut state);

	assert_eq!(state[0], 0xf125_8f79_40e1_dde7);
	assert_eq!(state[1], 0x84d5_ccf9_33c0_478a);

	keccak_f1600(&mut state);

	assert_eq!(state[0], 0x2d5c_954d_f96e_cb3c);
}

#[test]
fn absorb_block_only_touches_rate_lanes() {
	let block = [0xffu8; 16];

	let mut absorbed = [0; 25];
	absorb_block(&mut absorbed, &block, 2);

	let mut expected = [0; 25];
	expected[0] = u64::MAX;
	expected[1] = u64::MAX;
	keccak_f1600(&mut expected);

	assert_eq!(absorbed, expected);
}

#[test]
fn absorb_block_reads_lanes_little_endian() {
	let block = [1, 0, 0, 0, 0, 0, 0, 0x80];

	let mut absorbed = [0; 25];
	absorb_block(&mut absorbed, &block, 1);

	let mut expected = [0; 25];
	expected[0] = 0x8000_0000_0000_0001;
	keccak_f1600(&mut expected);

	assert_eq!(absorbed, expected);
}
