//! Random Source Port - uniform index draws.
//!
//! Flower sampling and the open-ended size fallback both draw through this
//! port so tests can pin the outcome. Not a cryptographic source.

/// Source of uniformly distributed indices.
///
/// # Contract
///
/// `next_index(upper)` returns a value in `0..upper`. Callers never pass zero.
pub trait RandomSource: Send {
    fn next_index(&mut self, upper: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_index(&mut self, upper: usize) -> usize {
        (**self).next_index(upper)
    }
}
