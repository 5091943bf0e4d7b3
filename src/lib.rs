pub mod estimation;
pub mod evaluation;
pub mod logging;
pub mod sampling;
pub mod ui;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
