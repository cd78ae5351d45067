use super::super::LaneState;

/// Left-rotation applied to each lane, indexed by `x + 5 * y`.
pub const ROTATION_OFFSETS: [u32; 25] = [
	 0,  1, 62, 28, 27,
	36, 44,  6, 55, 20,
	 3, 10, 43, 25, 39,
	41, 45, 15, 21,  8,
	18,  2, 61, 56, 14,
];

pub fn rho(state: &mut LaneState) {
	for (lane, &offset) in state.iter_mut().zip(ROTATION_OFFSETS.iter()) {
		*lane = lane.rotate_left(offset);
	}
}

#[test]
fn offsets_follow_the_rho_walk() {
	let mut expected = [0u32; 25];
	let mut rotation_amount = 0u32;

	let mut x = 1;
	let mut y = 0;

	for t in 0 .. 24u32 {
		rotation_amount += t + 1;

		expected[x + 5 * y] = rotation_amount % 64;

		let new_x = y;
		let new_y = (2 * x + 3 * y) % 5;

		x = new_x;
		y = new_y;
	}

	assert_eq!(ROTATION_OFFSETS, expected);
}
