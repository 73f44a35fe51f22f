//! Random number source used by the position generators.

/// A source of uniformly distributed indices.
///
/// The initializer draws every random decision through this trait, so a
/// seeded generator makes its output reproducible and a test double can count
/// or script the draws.
///
/// # Examples
///
/// ```
/// use init_positions::RandomSource;
///
/// let mut rng = fastrand::Rng::with_seed(42);
/// let i = rng.below(10);
/// assert!(i < 10);
/// ```
pub trait RandomSource {
    /// Returns an integer drawn uniformly from `[0, upper)`.
    ///
    /// Callers never pass `upper == 0`.
    fn below(&mut self, upper: usize) -> usize;
}

impl RandomSource for fastrand::Rng {
    #[inline]
    fn below(&mut self, upper: usize) -> usize {
        self.usize(..upper)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn below(&mut self, upper: usize) -> usize {
        (**self).below(upper)
    }
}

/// Select `k` random indices from `0..n` using partial Fisher-Yates shuffle.
///
/// The result is in selection order; every `k`-subset is equally likely.
pub(crate) fn partial_shuffle<R: RandomSource + ?Sized>(
    n: usize,
    k: usize,
    rng: &mut R,
) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    let k = k.min(n);
    for i in 0..k {
        let j = i + rng.below(n - i);
        indices.swap(i, j);
    }
    indices.truncate(k);
    indices
}
