use super::super::LaneState;

pub fn chi(state: &mut LaneState) {
	for y in 0 .. 5 {
		let row = &mut state[5 * y ..][.. 5];
		let mut new_row = [0u64; 5];

		for x in 0 .. 5 {
			let xp1 = (x + 1) % 5;
			let xp2 = (x + 2) % 5;

			new_row[x] = !row[xp1] & row[xp2];
		}

		for x in 0 .. 5 {
			row[x] ^= new_row[x];
		}
	}
}

#[test]
fn zero_state_is_fixed() {
	let mut state = [0; 25];
	chi(&mut state);
	assert_eq!(state, [0; 25]);
}

#[test]
fn acts_on_rows_independently() {
	let mut state = [0; 25];
	state[7] = u64::MAX;

	chi(&mut state);

	// only row 1 (lanes 5..10) can change; lane 5 = 5 ^ (!6 & 7)
	assert_eq!(state[5], u64::MAX);
	assert_eq!(state[7], u64::MAX);
	assert_eq!(state[6], 0);
	assert!(state[.. 5].iter().chain(&state[10 ..]).all(|&lane| lane == 0));
}
