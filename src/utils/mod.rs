pub mod export;
pub mod math;

pub use export::ExportFormat;
