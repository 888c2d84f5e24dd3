//! Ask the model to name our location at the resolution given as user
//! input.
//!
//! Requires `OPENAI_API_KEY` to be set, either in the environment or
//! in a `.env` file.

#![allow(clippy::print_stdout)]

use std::sync::Arc;

use sr_config::{OpenaiConfig, load_env_file};
use sr_llm::{
    StructuredCall,
    provider::openai::Openai,
    schema::{PropertyConfig, ResponseSchema},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    load_env_file()?;

    let provider = Openai::try_from(&OpenaiConfig::default())?;
    let properties = ResponseSchema::from_iter([(
        "location_name".to_owned(),
        PropertyConfig::string("The name of the location we are in"),
    )]);

    let where_are_we = StructuredCall::new(
        Arc::new(provider),
        "The name of our location, at this resolution",
        properties,
    );

    // {"original_input": "Our galaxy", "location_name": "Milky Way"}
    let fields = where_are_we.call("Our galaxy").await?;
    println!("{}", serde_json::to_string_pretty(&fields)?);

    Ok(())
}
