use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of tie-break choices.
pub trait RandomSource {
    /// Uniform index in `0..len`. Callers never pass zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// [`RandomSource`] over any `rand` generator.
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Reproducible source.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed list of picks, wrapping each into range and cycling.
///
/// An empty list always picks index 0, i.e. the best-ranked candidate.
#[derive(Debug, Clone, Default)]
pub struct FixedPicks {
    picks: Vec<usize>,
    cursor: usize,
}

impl FixedPicks {
    pub fn new(picks: Vec<usize>) -> Self {
        Self { picks, cursor: 0 }
    }

    /// Always the first candidate.
    pub fn first() -> Self {
        Self::default()
    }
}

impl RandomSource for FixedPicks {
    fn pick_index(&mut self, len: usize) -> usize {
        if self.picks.is_empty() {
            return 0;
        }
        let pick = self.picks[self.cursor % self.picks.len()];
        self.cursor += 1;
        pick % len
    }
}

/// Random element of `items`, `None` when empty.
pub fn choose<'a, T>(items: &[&'a T], rng: &mut dyn RandomSource) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    Some(items[rng.pick_index(items.len())])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = RngSource::seeded(7);
        let mut b = RngSource::seeded(7);
        let xs: Vec<usize> = (0..20).map(|_| a.pick_index(10)).collect();
        let ys: Vec<usize> = (0..20).map(|_| b.pick_index(10)).collect();
        assert_eq!(xs, ys);
        assert!(xs.iter().all(|&x| x < 10));
    }

    #[test]
    fn test_fixed_picks_cycle_and_wrap() {
        let mut picks = FixedPicks::new(vec![1, 5]);
        assert_eq!(picks.pick_index(3), 1);
        assert_eq!(picks.pick_index(3), 2);
        assert_eq!(picks.pick_index(3), 1);

        let mut first = FixedPicks::first();
        assert_eq!(first.pick_index(3), 0);
    }

    #[test]
    fn test_choose() {
        let values = [10, 20, 30];
        let refs: Vec<&i32> = values.iter().collect();
        let mut picks = FixedPicks::new(vec![2]);
        assert_eq!(choose(&refs, &mut picks), Some(&30));

        let empty: Vec<&i32> = Vec::new();
        assert_eq!(choose(&empty, &mut picks), None);
    }
}
