use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::iter::{ExactSizeIterator, FusedIterator};

/// An iterator over the values `0..num` in a pseudo-random order fully
/// decided by `seed`, so a test failure can be replayed.
pub struct ShuffledGenerator {
    values: Vec<u64>,
    position: usize,
}

impl ShuffledGenerator {
    pub fn new(num: u64, seed: u64) -> ShuffledGenerator {
        let mut values: Vec<u64> = (0..num).collect();
        let mut rng = Pcg64::seed_from_u64(seed);
        values.shuffle(&mut rng);
        ShuffledGenerator {
            values,
            position: 0,
        }
    }
}

impl Iterator for ShuffledGenerator {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position == self.values.len() {
            None
        } else {
            let r = self.values[self.position];
            self.position += 1;
            Some(r)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.values.len() - self.position;
        (size, Some(size))
    }
}

impl FusedIterator for ShuffledGenerator {}

impl ExactSizeIterator for ShuffledGenerator {}
