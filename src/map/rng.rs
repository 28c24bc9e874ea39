use rand::Rng;

/// Source of uniform floats in `[0, 1)`. Passed into the sampling functions
/// explicitly so tests can substitute a scripted sequence.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Production source backed by the thread-local generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}
