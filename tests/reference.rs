use libsha3::sha3::{digest, Padding, Sha3, Variant};
use proptest::prelude::*;
use sha3::Digest as _;

fn reference(variant: Variant, padding: Padding, data: &[u8]) -> Vec<u8> {
	match (variant, padding) {
		(Variant::Sha3_224, Padding::Sha3) => sha3::Sha3_224::digest(data).to_vec(),
		(Variant::Sha3_256, Padding::Sha3) => sha3::Sha3_256::digest(data).to_vec(),
		(Variant::Sha3_384, Padding::Sha3) => sha3::Sha3_384::digest(data).to_vec(),
		(Variant::Sha3_512, Padding::Sha3) => sha3::Sha3_512::digest(data).to_vec(),
		(Variant::Sha3_224, Padding::Keccak) => sha3::Keccak224::digest(data).to_vec(),
		(Variant::Sha3_256, Padding::Keccak) => sha3::Keccak256::digest(data).to_vec(),
		(Variant::Sha3_384, Padding::Keccak) => sha3::Keccak384::digest(data).to_vec(),
		(Variant::Sha3_512, Padding::Keccak) => sha3::Keccak512::digest(data).to_vec(),
	}
}

fn variant() -> impl Strategy<Value = Variant> {
	prop::sample::select(Variant::ALL.to_vec())
}

fn padding() -> impl Strategy<Value = Padding> {
	prop_oneof![Just(Padding::Sha3), Just(Padding::Keccak)]
}

#[test]
fn every_length_around_the_first_blocks() {
	// covers rate - 1, rate and rate + 1 (and twice that) for every variant
	let data: Vec<u8> = (0 .. 300).map(|i| (i * 7 + 3) as u8).collect();

	for variant in Variant::ALL {
		for padding in [Padding::Sha3, Padding::Keccak] {
			for len in 0 ..= data.len() {
				let ours = digest(variant, padding, &data[.. len]);

				assert_eq!(
					ours.as_bytes(),
					&reference(variant, padding, &data[.. len])[..],
					"{} {:?} length {}",
					variant,
					padding,
					len,
				);
			}
		}
	}
}

proptest! {
	#[test]
	fn one_shot_matches_reference(
		variant in variant(),
		padding in padding(),
		data in proptest::collection::vec(any::<u8>(), 0 ..= 1024),
	) {
		let ours = digest(variant, padding, &data);
		prop_assert_eq!(ours.as_bytes(), &reference(variant, padding, &data)[..]);
	}

	#[test]
	fn streaming_matches_one_shot(
		variant in variant(),
		data in proptest::collection::vec(any::<u8>(), 0 ..= 1024),
		chunk in 1usize ..= 200,
	) {
		let one_shot = digest(variant, Padding::Sha3, &data);

		let mut hasher = Sha3::new(variant);

		for part in data.chunks(chunk) {
			hasher.absorb(part).unwrap();
		}

		prop_assert_eq!(hasher.finalize().unwrap(), one_shot);
	}

	#[test]
	fn ranges_match_slices(
		data in proptest::collection::vec(any::<u8>(), 0 ..= 512),
		cuts in proptest::collection::vec(any::<prop::sample::Index>(), 0 .. 8),
	) {
		let mut points: Vec<usize> = cuts.iter().map(|cut| cut.index(data.len() + 1)).collect();
		points.push(0);
		points.push(data.len());
		points.sort_unstable();

		let mut hasher = Sha3::new(Variant::Sha3_256);

		for window in points.windows(2) {
			hasher.absorb_range(&data, window[0], window[1] - window[0]).unwrap();
		}

		prop_assert_eq!(hasher.finalize().unwrap(), digest(Variant::Sha3_256, Padding::Sha3, &data));
	}

	#[test]
	fn reset_forgets_previous_session(
		variant in variant(),
		first in proptest::collection::vec(any::<u8>(), 0 ..= 400),
		second in proptest::collection::vec(any::<u8>(), 0 ..= 400),
		finish_first in any::<bool>(),
	) {
		let mut hasher = Sha3::new(variant);
		hasher.absorb(&first).unwrap();

		if finish_first {
			hasher.finalize().unwrap();
		}

		hasher.reset();
		hasher.absorb(&second).unwrap();

		prop_assert_eq!(hasher.finalize().unwrap(), digest(variant, Padding::Sha3, &second));
	}
}
