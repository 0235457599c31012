//! Identical start and end markers: quoted strings and CSV fields.
//!
//! Run with: cargo run --example quoted_strings

use std::error::Error;
use texts_between::TextsBetween;

fn main() -> Result<(), Box<dyn Error>> {
    // Backslash-escaped quotes
    let quotes = TextsBetween::new("\"", "\"")?;
    let line = r#"name="squid" title="a \"big\" fish""#;
    println!("{}", line);
    println!("  -> {:?}\n", quotes.get(line)?);

    // CSV style: a doubled quote inside a field is a literal quote
    let csv = TextsBetween::builder("\"", "\"").with_escape("\"").build()?;
    let row = r#"42,"Widget, large","says ""hi""","""#;
    println!("{}", row);
    for field in csv.get(row)? {
        println!("  field: {:?}", field);
    }

    // Same markers cannot nest
    if let Err(e) = TextsBetween::builder("|", "|").with_nested_allowed().build() {
        println!("\nNested `|` markers: {}", e);
    }

    Ok(())
}
