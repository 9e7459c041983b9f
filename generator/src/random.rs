//! Random sources.
//!
//! Every range method tolerates degenerate input (empty or inverted
//! ranges) by returning the lower end instead of panicking, so callers can
//! feed bounds straight from parameter descriptions.

use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the random primitives mutators and providers draw from.
pub trait RandomSource {
    /// Uniform integer in the closed range `[min, max]`.
    fn next_int(&mut self, min: i64, max: i64) -> i64;

    /// Uniform real in the half-open range `[min, max)`.
    fn next_double(&mut self, min: f64, max: f64) -> f64;

    /// Uniform length in the half-open range `[min, max)`.
    fn next_length(&mut self, min: usize, max: usize) -> usize;

    /// Alphanumeric string of exactly `len` characters.
    fn next_random_string(&mut self, len: usize) -> String;

    fn next_bool(&mut self) -> bool;

    /// Uniform index into a collection of `len` elements, `None` when empty.
    fn next_index(&mut self, len: usize) -> Option<usize>;

    /// Uniform pick from `items`, `None` when empty.
    fn next_element<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        self.next_index(items.len()).and_then(|i| items.get(i))
    }
}

/// `RandomSource` backed by a seedable `StdRng`.
#[derive(Debug, Clone)]
pub struct ExtendedRandom {
    rng: StdRng,
}

impl ExtendedRandom {
    /// Deterministic source for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for ExtendedRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for ExtendedRandom {
    fn next_int(&mut self, min: i64, max: i64) -> i64 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    fn next_double(&mut self, min: f64, max: f64) -> f64 {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return min;
        }
        let t: f64 = self.rng.gen();
        let mut value = min + (max - min) * t;
        if !value.is_finite() {
            // max - min overflowed
            value = min * (1.0 - t) + max * t;
        }
        if value < max {
            value
        } else {
            min
        }
    }

    fn next_length(&mut self, min: usize, max: usize) -> usize {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..max)
    }

    fn next_random_string(&mut self, len: usize) -> String {
        (&mut self.rng)
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect()
    }

    fn next_bool(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    fn next_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.rng.gen_range(0..len))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_seeded_sources_agree() {
        let mut a = ExtendedRandom::seeded(7);
        let mut b = ExtendedRandom::seeded(7);

        let xs: Vec<i64> = (0..16).map(|_| a.next_int(-50, 50)).collect();
        let ys: Vec<i64> = (0..16).map(|_| b.next_int(-50, 50)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_entropy_sources_stay_in_bounds() {
        let mut sources = [ExtendedRandom::from_entropy(), ExtendedRandom::default()];

        for random in sources.iter_mut() {
            for _ in 0..100 {
                assert!((1..=6).contains(&random.next_int(1, 6)));
                assert!(random.next_index(4).is_some_and(|i| i < 4));
            }
        }
    }

    #[test]
    fn test_degenerate_ranges_return_lower_end() {
        let mut random = ExtendedRandom::seeded(1);

        assert_eq!(random.next_int(5, 5), 5);
        assert_eq!(random.next_int(9, 2), 9);
        assert_eq!(random.next_double(3.0, 3.0), 3.0);
        assert_eq!(random.next_double(4.0, 1.0), 4.0);
        assert_eq!(random.next_length(6, 6), 6);
        assert_eq!(random.next_length(6, 0), 6);
        assert!(random.next_double(f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn test_ranges_stay_in_bounds() {
        let mut random = ExtendedRandom::seeded(42);

        for _ in 0..1000 {
            let i = random.next_int(-3, 3);
            assert!((-3..=3).contains(&i));

            let d = random.next_double(10.0, 20.0);
            assert!((10.0..20.0).contains(&d));

            let len = random.next_length(0, 5);
            assert!(len < 5);
        }
    }

    #[test]
    fn test_double_range_wider_than_f64() {
        let mut random = ExtendedRandom::seeded(3);

        for _ in 0..100 {
            let d = random.next_double(f64::MIN, f64::MAX);
            assert!(d.is_finite());
            assert!(d < f64::MAX);
        }
    }

    #[test]
    fn test_random_string_has_exact_length() {
        let mut random = ExtendedRandom::seeded(11);

        for len in [0, 1, 17, 300] {
            let s = random.next_random_string(len);
            assert_eq!(s.chars().count(), len);
            assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_next_element() {
        let mut random = ExtendedRandom::seeded(5);
        let empty: [u8; 0] = [];
        let items = ["a", "b", "c"];

        assert_eq!(random.next_element(&empty), None);
        for _ in 0..50 {
            let picked = random.next_element(&items);
            assert!(picked.is_some_and(|p| items.contains(p)));
        }
    }
}
