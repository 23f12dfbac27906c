//! Secure randomness: the OS source and bias-free bounded draws.

mod os;

use rand::{CryptoRng, RngCore};

use crate::error::{Error, Result};

pub use os::SecureSource;

/// Uniform index in `0..bound` using rejection sampling.
///
/// Draws 32-bit words and discards any at or above the largest multiple
/// of `bound`, so every index is equally likely. `bound` must be in
/// `1..=u32::MAX`.
pub fn bounded_index<R: RngCore + CryptoRng>(rng: &mut R, bound: usize) -> Result<usize> {
    debug_assert!(bound > 0 && bound as u64 <= u32::MAX as u64);
    let bound = bound as u32;
    let zone = (u32::MAX / bound) * bound;

    loop {
        let value = next_word(rng)?;
        if value < zone {
            return Ok((value % bound) as usize);
        }
        log::trace!("rejected draw {value} (zone {zone})");
    }
}

#[inline]
fn next_word<R: RngCore>(rng: &mut R) -> Result<u32> {
    let mut word = [0u8; 4];
    rng.try_fill_bytes(&mut word)
        .map_err(Error::EntropyUnavailable)?;
    Ok(u32::from_le_bytes(word))
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;

    use rand::{CryptoRng, RngCore};

    /// Replays a fixed list of 32-bit words.
    pub struct Scripted(pub VecDeque<u32>);

    impl RngCore for Scripted {
        fn next_u32(&mut self) -> u32 {
            self.0.pop_front().expect("script exhausted")
        }

        fn next_u64(&mut self) -> u64 {
            self.next_u32() as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.try_fill_bytes(dest).expect("script exhausted")
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            assert_eq!(dest.len(), 4, "scripted source only serves words");
            dest.copy_from_slice(&self.next_u32().to_le_bytes());
            Ok(())
        }
    }

    impl CryptoRng for Scripted {}

    /// Always fails, like a kernel without a usable entropy source.
    pub struct Broken;

    impl RngCore for Broken {
        fn next_u32(&mut self) -> u32 {
            panic!("broken source")
        }

        fn next_u64(&mut self) -> u64 {
            panic!("broken source")
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            panic!("broken source")
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("entropy source unavailable"))
        }
    }

    impl CryptoRng for Broken {}
}

#[cfg(test)]
mod tests {
    use super::testing::{Broken, Scripted};
    use super::*;

    #[test]
    fn accepts_values_below_zone() {
        let mut rng = Scripted([0, 87, 88, 1000].into());
        let drawn: Vec<usize> = (0..4)
            .map(|_| bounded_index(&mut rng, 88).unwrap())
            .collect();
        assert_eq!(drawn, vec![0, 87, 0, 1000 % 88]);
    }

    #[test]
    fn rejects_values_in_biased_tail() {
        // (u32::MAX / 88) * 88 == 4_294_967_248
        let mut rng = Scripted([u32::MAX, 4_294_967_248, 4_294_967_247, 5].into());
        assert_eq!(bounded_index(&mut rng, 88).unwrap(), 4_294_967_247 % 88);
        assert_eq!(bounded_index(&mut rng, 88).unwrap(), 5);
    }

    #[test]
    fn bound_of_one_is_always_zero() {
        let mut rng = Scripted([0, 12345].into());
        assert_eq!(bounded_index(&mut rng, 1).unwrap(), 0);
        assert_eq!(bounded_index(&mut rng, 1).unwrap(), 0);
    }

    #[test]
    fn source_failure_is_entropy_unavailable() {
        assert!(matches!(
            bounded_index(&mut Broken, 26),
            Err(Error::EntropyUnavailable(_))
        ));
    }

    #[test]
    fn os_source_produces_in_range_indices() {
        let mut rng = SecureSource::new();
        for _ in 0..1000 {
            assert!(bounded_index(&mut rng, 62).unwrap() < 62);
        }
    }
}
