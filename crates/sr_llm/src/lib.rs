mod error;
pub mod provider;
pub mod query;
pub mod schema;
pub mod structured;
pub mod tool;

pub use error::Error;
pub use provider::Provider;
pub use structured::StructuredCall;
