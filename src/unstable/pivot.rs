use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks the element a quicksort partitions around.
///
/// Implementations are only called with `v.len() >= 2` and must return an in-bounds index.
pub trait ChoosePivot {
    fn choose_pivot<T, F>(&mut self, v: &[T], is_less: &mut F) -> usize
    where
        F: FnMut(&T, &T) -> bool;
}

/// Always the first element. Ascending and descending inputs hit the quadratic worst case.
#[derive(Copy, Clone, Debug, Default)]
pub struct FirstElement;

impl ChoosePivot for FirstElement {
    #[inline]
    fn choose_pivot<T, F>(&mut self, _v: &[T], _is_less: &mut F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        0
    }
}

/// Always the last element, the classic Lomuto choice. Same worst cases as [`FirstElement`].
#[derive(Copy, Clone, Debug, Default)]
pub struct LastElement;

impl ChoosePivot for LastElement {
    #[inline]
    fn choose_pivot<T, F>(&mut self, v: &[T], _is_less: &mut F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        v.len().saturating_sub(1)
    }
}

/// Median of the first, middle and last element.
#[derive(Copy, Clone, Debug, Default)]
pub struct MedianOfThree;

impl ChoosePivot for MedianOfThree {
    fn choose_pivot<T, F>(&mut self, v: &[T], is_less: &mut F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        let len = v.len();
        if len < 3 {
            return 0;
        }

        median3(v, 0, len / 2, len - 1, is_less)
    }
}

/// Calculates the index of the median of `v[a]`, `v[b]` and `v[c]`.
#[inline(always)]
fn median3<T, F>(v: &[T], a: usize, b: usize, c: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let swap = [a, b, c];

    // Always three comparisons, the index math keeps it branch free.
    let x = is_less(&v[b], &v[a]);
    let y = is_less(&v[c], &v[a]);
    let z = is_less(&v[c], &v[b]);

    let index = (x == y) as usize + (y != z) as usize;
    swap[index]
}

/// Uniformly random position. Makes the quadratic case independent of the input order.
#[derive(Clone, Debug)]
pub struct RandomPivot {
    rng: StdRng,
}

impl RandomPivot {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible pivot sequence, mostly useful for tests and benchmarks.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPivot {
    fn default() -> Self {
        Self::new()
    }
}

impl ChoosePivot for RandomPivot {
    fn choose_pivot<T, F>(&mut self, v: &[T], _is_less: &mut F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        if v.is_empty() {
            return 0;
        }

        self.rng.gen_range(0..v.len())
    }
}
