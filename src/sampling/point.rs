use std::fmt::{Display, Formatter};

/// A sampled location in the unit hypercube `[0, 1)^d`.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    coordinates: Vec<f64>,
}

impl Point {
    #[inline]
    pub fn new(coordinates: Vec<f64>) -> Self {
        Self { coordinates }
    }

    #[inline]
    pub fn dimensions(&self) -> usize {
        self.coordinates.len()
    }

    #[inline]
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    #[inline]
    pub fn squared_norm(&self) -> f64 {
        self.coordinates.iter().map(|x| x * x).sum()
    }

    /// Euclidean distance from the origin.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.squared_norm().sqrt()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.coordinates.clone()
    }
}

impl From<Vec<f64>> for Point {
    fn from(coordinates: Vec<f64>) -> Self {
        Self::new(coordinates)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, x) in self.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x:.6}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn norm_is_pythagorean_in_any_dimension() {
        let p = Point::new(vec![0.6, 0.8]);
        assert!((p.norm() - 1.0).abs() < 1e-12);

        let q = Point::new(vec![0.5, 0.5, 0.5, 0.5]);
        assert!((q.squared_norm() - 1.0).abs() < 1e-12);
        assert_eq!(q.dimensions(), 4);
    }

    #[test]
    fn empty_point_has_zero_norm() {
        let p = Point::new(vec![]);
        assert_eq!(p.norm(), 0.0);
        assert_eq!(p.dimensions(), 0);
    }

    #[test]
    fn display_lists_coordinates() {
        let p = Point::from(vec![0.25, 0.5]);
        assert_eq!(p.to_string(), "(0.250000, 0.500000)");
    }
}
