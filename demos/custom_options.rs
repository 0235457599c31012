//! Escapes, nesting and stale start markers.
//!
//! Run with: cargo run --example custom_options

use std::error::Error;
use texts_between::{PatternOptions, TextsBetween};

fn main() -> Result<(), Box<dyn Error>> {
    let text = "[i18n:Hello [name]] and 'literal' [rest";

    // Default: nesting is an error
    let strict = TextsBetween::new("[", "]")?;
    match strict.get(text) {
        Ok(values) => println!("Strict: {:?}", values),
        Err(e) => println!("Strict: {}", e),
    }

    // Nesting allowed, unterminated start markers dropped
    let nested = TextsBetween::builder("[", "]")
        .with_nested_allowed()
        .with_stale_start_ignored()
        .build()?;
    println!("Nested + lenient: {:?}", nested.get(text)?);

    // A custom escape sequence
    let ticks = TextsBetween::builder("${", "}").with_escape("'").build()?;
    println!("Custom escape: {:?}", ticks.get("'${kept} ${value}")?);

    // An empty escape disables escaping
    let raw = TextsBetween::builder("[", "]").with_escape("").build()?;
    println!("No escape: {:?}", raw.get("\\[x]")?);

    // Options can come from configuration
    let options: PatternOptions = serde_json::from_str(
        r#"{ "start": "<%", "end": "%>", "allow_nested": false, "ignore_stale_start": true }"#,
    )?;
    let erb = TextsBetween::with_options(options)?;
    println!("From JSON: {:?}", erb.get("<%= user %> <% if")?);
    println!("Options back: {}", serde_json::to_string(&erb.options())?);

    Ok(())
}
