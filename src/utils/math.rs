use std::f64::consts::PI;

/// Turns an inside/total ratio into a Pi estimate: `ratio * 2 * dimensions`.
///
/// Exact only for 2 and 3 dimensions, where the quadrant volume is `pi / 4`
/// and `pi / 6`. Other dimensions do not yield a valid estimate.
#[inline]
pub fn solve_for_pi(ratio: f64, dimensions: usize) -> f64 {
    ratio * 2.0 * dimensions as f64
}

/// Volume of the unit n-ball: `pi^(n/2) / Gamma(n/2 + 1)`.
pub fn unit_ball_volume(dimensions: usize) -> f64 {
    let half = dimensions as f64 / 2.0;
    PI.powf(half) / libm::tgamma(half + 1.0)
}

/// Fraction of the unit hypercube covered by the positive quadrant of the
/// unit n-ball. This is the ratio a perfect sampler converges to.
pub fn quadrant_volume(dimensions: usize) -> f64 {
    unit_ball_volume(dimensions) / 2f64.powi(dimensions as i32)
}
