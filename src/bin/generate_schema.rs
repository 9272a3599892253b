//! Generate the JSON Schema for the navigator configuration
//!
//! This binary generates a JSON Schema from `NavigatorConfig` using schemars.
//!
//! Usage:
//!   cargo run --features dev-bins --bin generate_schema > navigator-config.schema.json

use feednav::config::NavigatorConfig;
use schemars::schema_for;

fn main() {
    let schema = schema_for!(NavigatorConfig);
    let output = serde_json::to_string_pretty(&schema).expect("Failed to serialize schema");
    println!("{}", output);
}
