use super::super::LaneState;

pub fn theta(state: &mut LaneState) {
	let mut parities = [0u64; 5];

	for x in 0 .. 5 {
		for y in 0 .. 5 {
			parities[x] ^= state[x + 5 * y];
		}
	}

	for x in 0 .. 5 {
		let xm1 = (x + 4) % 5;
		let xp1 = (x + 1) % 5;

		let crossed_parities = parities[xm1] ^ parities[xp1].rotate_left(1);

		for y in 0 .. 5 {
			state[x + 5 * y] ^= crossed_parities;
		}
	}
}

#[test]
fn single_bit_spreads_to_two_columns() {
	let mut state = [0; 25];
	state[0] = 1;

	theta(&mut state);

	// column 1 picks up C[0] directly, column 4 picks up C[0] rotated by one
	for y in 0 .. 5 {
		assert_eq!(state[1 + 5 * y], 1);
		assert_eq!(state[4 + 5 * y], 2);
		assert_eq!(state[2 + 5 * y], 0);
		assert_eq!(state[3 + 5 * y], 0);
	}

	assert_eq!(state[0], 1);
}
