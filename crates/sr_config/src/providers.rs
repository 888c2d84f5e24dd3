//! Provider configurations.

pub mod openai;
