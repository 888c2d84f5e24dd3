mod env;
mod error;
pub mod parameters;
pub mod providers;

pub use env::{load_env_file, load_env_file_from};
pub use error::Error;
pub use parameters::ParametersConfig;
pub use providers::openai::OpenaiConfig;
