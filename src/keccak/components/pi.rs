use super::super::LaneState;

/// `PI_SOURCES[i]` is the lane that moves into position `i`.
const PI_SOURCES: [usize; 25] = [
	 0,  6, 12, 18, 24,
	 3,  9, 10, 16, 22,
	 1,  7, 13, 19, 20,
	 4,  5, 11, 17, 23,
	 2,  8, 14, 15, 21,
];

pub fn pi(state: &mut LaneState) {
	let old_state = *state;

	for (lane, &source) in state.iter_mut().zip(PI_SOURCES.iter()) {
		*lane = old_state[source];
	}
}

#[test]
fn sources_match_relabeling() {
	for x in 0 .. 5 {
		for y in 0 .. 5 {
			let new_x = y;
			let new_y = (2 * x + 3 * y) % 5;

			assert_eq!(PI_SOURCES[new_x + 5 * new_y], x + 5 * y);
		}
	}
}

#[test]
fn origin_lane_stays_put() {
	let mut state = [0; 25];

	for (i, lane) in state.iter_mut().enumerate() {
		*lane = i as u64;
	}

	pi(&mut state);

	assert_eq!(state[0], 0);
	assert_eq!(state[1], 6);
	assert_eq!(state[5], 3);
}
