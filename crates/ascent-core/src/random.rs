use rand::Rng;

/// Injectable source of randomness for generation and simulation.
///
/// Every `rand::Rng` is a `RandomSource`, so tests pass a seeded
/// `StdRng` and get reproducible layouts.
pub trait RandomSource {
    /// Uniform integer in `[0, n)`. Returns 0 when `n == 0`.
    fn next_index(&mut self, n: usize) -> usize;

    /// Uniform integer in `[lo, hi]` (both inclusive). Returns `lo` when `hi < lo`.
    fn int_in(&mut self, lo: i32, hi: i32) -> i32;

    /// Uniform float in `[a, b)`. Returns `a` when the range is empty.
    fn float_in(&mut self, a: f32, b: f32) -> f32;

    /// Fair boolean.
    fn coin_flip(&mut self) -> bool;

    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f32 {
        self.float_in(0.0, 1.0)
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_index(&mut self, n: usize) -> usize {
        if n == 0 { 0 } else { self.random_range(0..n) }
    }

    fn int_in(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            lo
        } else {
            self.random_range(lo..=hi)
        }
    }

    fn float_in(&mut self, a: f32, b: f32) -> f32 {
        if b > a { self.random_range(a..b) } else { a }
    }

    fn coin_flip(&mut self) -> bool {
        self.random_bool(0.5)
    }
}
