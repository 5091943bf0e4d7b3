use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::sampling::{Point, PointSource};

/// Uniform sampler over `[0, 1)^d` that builds a fresh `StdRng` for every call.
///
/// Unseeded sources draw each generator from OS entropy. Seeded sources derive
/// the per-call seed from the base seed and a call counter, so a run is
/// reproducible while consecutive calls still see different data.
#[derive(Debug, Clone, Default)]
pub struct UniformSource {
    seed: Option<u64>,
    calls: u64,
}

impl UniformSource {
    pub fn from_entropy() -> Self {
        Self::default()
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            calls: 0,
        }
    }

    fn fresh_rng(&mut self) -> StdRng {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(self.calls)),
            None => StdRng::from_os_rng(),
        };
        self.calls += 1;
        rng
    }
}

impl PointSource for UniformSource {
    fn sample<'a>(
        &'a mut self,
        dimensions: usize,
        count: usize,
    ) -> Box<dyn Iterator<Item = Point> + 'a> {
        Box::new(UniformPoints::new(self.fresh_rng(), dimensions, count))
    }
}

/// Lazy, finite stream of uniformly distributed points.
#[derive(Debug)]
pub struct UniformPoints {
    rng: StdRng,
    dimensions: usize,
    remaining: usize,
}

impl UniformPoints {
    pub fn new(rng: StdRng, dimensions: usize, count: usize) -> Self {
        Self {
            rng,
            dimensions,
            remaining: count,
        }
    }

    #[inline]
    fn gen_coordinate(&mut self) -> f64 {
        self.rng.random_range(0.0..1.0)
    }
}

impl Iterator for UniformPoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let coordinates = (0..self.dimensions).map(|_| self.gen_coordinate()).collect();
        Some(Point::new(coordinates))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for UniformPoints {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_exact_count_with_requested_dimension() {
        let mut source = UniformSource::from_entropy();
        for d in [1usize, 2, 3, 7] {
            let points: Vec<Point> = source.sample(d, 250).collect();
            assert_eq!(points.len(), 250);
            for p in &points {
                assert_eq!(p.dimensions(), d);
                assert!(
                    p.coordinates().iter().all(|&x| (0.0..1.0).contains(&x)),
                    "coordinate out of [0, 1): {p}"
                );
            }
        }
    }

    #[test]
    fn zero_count_is_empty() {
        let mut source = UniformSource::seeded(1);
        assert_eq!(source.sample(3, 0).count(), 0);
    }

    #[test]
    fn size_hint_tracks_remaining() {
        let rng = StdRng::seed_from_u64(5);
        let mut it = UniformPoints::new(rng, 2, 3);
        assert_eq!(it.len(), 3);
        it.next();
        assert_eq!(it.len(), 2);
    }

    #[test]
    fn seeded_sources_are_reproducible() {
        let mut a = UniformSource::seeded(2025);
        let mut b = UniformSource::seeded(2025);
        let first_a: Vec<Point> = a.sample(3, 20).collect();
        let first_b: Vec<Point> = b.sample(3, 20).collect();
        assert_eq!(first_a, first_b);

        let second_a: Vec<Point> = a.sample(3, 20).collect();
        let second_b: Vec<Point> = b.sample(3, 20).collect();
        assert_eq!(second_a, second_b);
    }

    #[test]
    fn each_call_uses_a_fresh_generator() {
        let mut source = UniformSource::seeded(7);
        let first: Vec<Point> = source.sample(2, 10).collect();
        let second: Vec<Point> = source.sample(2, 10).collect();
        assert_ne!(first, second);
    }

    #[test]
    fn mean_coordinate_is_near_one_half() {
        let mut source = UniformSource::seeded(99);
        let n = 20_000;
        let sum: f64 = source.sample(1, n).map(|p| p.coordinates()[0]).sum();
        let mean = sum / n as f64;
        assert!((mean - 0.5).abs() < 0.02, "mean={mean}");
    }
}
