mod wizard;

pub use wizard::{prompt_choice, prompt_params, prompt_run_config};
