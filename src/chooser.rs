use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks which of the default activities is used for a day without an explicit one.
pub trait Chooser {
    /// Returns an index in `0..len`, or `None` if `len` is zero.
    fn choose_index(&mut self, len: usize) -> Option<usize>;

    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        self.choose_index(items.len()).and_then(|index| items.get(index))
    }
}

impl<C: Chooser + ?Sized> Chooser for &mut C {
    fn choose_index(&mut self, len: usize) -> Option<usize> {
        (**self).choose_index(len)
    }
}

/// Chooses uniformly at random.
#[derive(Debug, Clone)]
pub struct RandomChooser<R> {
    rng: R,
}

impl<R: Rng> RandomChooser<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomChooser<StdRng> {
    /// A chooser that always makes the same choices for the same `seed`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Chooser for RandomChooser<R> {
    fn choose_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.gen_range(0..len))
    }
}

/// Always picks the first item.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstChooser;

impl Chooser for FirstChooser {
    fn choose_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then_some(0)
    }
}
