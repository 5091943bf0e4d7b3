mod estimator_params;
mod run_choice;
mod run_config;
mod schema;
mod ui_choice;

pub use estimator_params::EstimatorParams;
pub use run_choice::*;
pub use run_config::RunConfig;
pub use schema::*;
pub use ui_choice::UIChoice;
