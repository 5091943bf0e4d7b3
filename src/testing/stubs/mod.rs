pub mod fixed_source;
pub mod scripted_driver;

pub use fixed_source::FixedSource;
pub use scripted_driver::ScriptedDriver;
