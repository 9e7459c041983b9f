//! Test doubles shared by unit tests.

use std::collections::VecDeque;
use tamper_generator::{ExtendedRandom, RandomSource};

/// Random source that replays scripted lengths, indices and doubles before
/// falling back to a seeded source.
pub(crate) struct ScriptedRandom {
    lengths: VecDeque<usize>,
    indices: VecDeque<usize>,
    doubles: VecDeque<f64>,
    fallback: ExtendedRandom,
}

impl ScriptedRandom {
    pub(crate) fn new() -> Self {
        Self {
            lengths: VecDeque::new(),
            indices: VecDeque::new(),
            doubles: VecDeque::new(),
            fallback: ExtendedRandom::seeded(0),
        }
    }

    pub(crate) fn with_lengths(mut self, lengths: impl IntoIterator<Item = usize>) -> Self {
        self.lengths.extend(lengths);
        self
    }

    pub(crate) fn with_indices(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.indices.extend(indices);
        self
    }

    pub(crate) fn with_doubles(mut self, doubles: impl IntoIterator<Item = f64>) -> Self {
        self.doubles.extend(doubles);
        self
    }
}

impl RandomSource for ScriptedRandom {
    fn next_int(&mut self, min: i64, max: i64) -> i64 {
        self.fallback.next_int(min, max)
    }

    fn next_double(&mut self, min: f64, max: f64) -> f64 {
        match self.doubles.pop_front() {
            Some(d) => d,
            None => self.fallback.next_double(min, max),
        }
    }

    fn next_length(&mut self, min: usize, max: usize) -> usize {
        match self.lengths.pop_front() {
            Some(len) => len,
            None => self.fallback.next_length(min, max),
        }
    }

    fn next_random_string(&mut self, len: usize) -> String {
        self.fallback.next_random_string(len)
    }

    fn next_bool(&mut self) -> bool {
        self.fallback.next_bool()
    }

    fn next_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        match self.indices.pop_front() {
            Some(i) => Some(i),
            None => self.fallback.next_index(len),
        }
    }
}
