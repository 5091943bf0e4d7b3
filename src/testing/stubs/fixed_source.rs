use crate::sampling::{Point, PointSource};

/// Replays a fixed sequence of points, wrapping around when exhausted.
///
/// The position carries over between calls, so successive samples continue
/// where the previous one stopped. Each stored point is truncated or padded
/// with zeros to the requested dimension.
pub struct FixedSource {
    pub points: Vec<Vec<f64>>,
    idx: usize,
}

impl FixedSource {
    pub fn new(points: Vec<Vec<f64>>) -> Self {
        assert!(!points.is_empty(), "FixedSource needs at least one point");
        Self { points, idx: 0 }
    }

    fn next_point(&mut self, dimensions: usize) -> Point {
        let raw = &self.points[self.idx];
        self.idx = (self.idx + 1) % self.points.len();
        let coordinates = (0..dimensions)
            .map(|i| raw.get(i).copied().unwrap_or(0.0))
            .collect();
        Point::new(coordinates)
    }
}

impl PointSource for FixedSource {
    fn sample<'a>(
        &'a mut self,
        dimensions: usize,
        count: usize,
    ) -> Box<dyn Iterator<Item = Point> + 'a> {
        Box::new((0..count).map(move |_| self.next_point(dimensions)))
    }
}
