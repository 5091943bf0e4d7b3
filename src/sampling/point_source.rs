use crate::sampling::Point;

/// Supplier of random points for an estimator.
///
/// Each call to [`sample`] is an independent draw: implementations must not
/// share generator state between calls unless they are deliberately replaying
/// a fixed sequence (e.g. in tests). The returned iterator is lazy and finite.
///
/// [`sample`]: PointSource::sample
pub trait PointSource {
    /// Produces exactly `count` points of `dimensions` coordinates each.
    fn sample<'a>(
        &'a mut self,
        dimensions: usize,
        count: usize,
    ) -> Box<dyn Iterator<Item = Point> + 'a>;
}
