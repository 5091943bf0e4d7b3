mod point;
mod point_source;
mod uniform_source;

pub use point::Point;
pub use point_source::PointSource;
pub use uniform_source::{UniformPoints, UniformSource};
