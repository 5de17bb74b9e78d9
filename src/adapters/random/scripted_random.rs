//! Scripted random source for tests and replays.

use std::collections::VecDeque;

use crate::ports::RandomSource;

/// Replays a fixed sequence of draws.
///
/// Each scripted value is reduced modulo the requested upper bound, so a
/// script stays valid whatever range the caller asks for. Once the script is
/// exhausted every draw returns 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    script: VecDeque<usize>,
}

impl ScriptedRandom {
    pub fn new(script: Vec<usize>) -> Self {
        Self {
            script: script.into(),
        }
    }

    /// Draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        self.script.pop_front().map_or(0, |value| value % upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_in_order() {
        let mut random = ScriptedRandom::new(vec![1, 3, 2]);
        assert_eq!(random.next_index(10), 1);
        assert_eq!(random.next_index(10), 3);
        assert_eq!(random.next_index(10), 2);
    }

    #[test]
    fn values_wrap_into_range() {
        let mut random = ScriptedRandom::new(vec![7]);
        assert_eq!(random.next_index(3), 1);
    }

    #[test]
    fn exhausted_script_yields_zero() {
        let mut random = ScriptedRandom::new(vec![4]);
        random.next_index(8);
        assert_eq!(random.remaining(), 0);
        assert_eq!(random.next_index(8), 0);
    }
}
