#![cfg_attr(not(feature = "std"), no_std)]

//! Streaming [SHA-3](https://en.wikipedia.org/wiki/SHA-3) and Keccak hashing
//! built on the Keccak-f\[1600\] permutation.
//!
//! Only the four standard output lengths are supported. There is no SHAKE or
//! other extendable-output mode.

// to prevent broken links when building documentation in #![no_std] mode
#[cfg(all(not(feature = "std"), doc))]
extern crate std;

pub mod error;

mod keccak;

#[doc(inline)]
pub use error::Error;

#[doc(inline)]
pub use keccak::sha3;

pub use keccak::{keccak_f1600, LaneState};
