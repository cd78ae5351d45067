use super::super::{LaneState, ROUND_CONSTANTS};

pub fn iota(state: &mut LaneState, round_number: usize) {
	state[0] ^= ROUND_CONSTANTS[round_number];
}
