//! Extracting and splitting enclosed values.
//!
//! Run with: cargo run --example simple

use std::error::Error;
use texts_between::{Segment, TextsBetween};

fn main() -> Result<(), Box<dyn Error>> {
    let brackets = TextsBetween::new("[", "]")?;
    let html = "<div><span>[name]</span><label>[title]</label></div>";

    // Values between the markers
    let values = brackets.get(html)?;
    println!("Values: {:?}\n", values);
    assert_eq!(values, vec!["name", "title"]);

    // The whole text, cut into literals and matches
    println!("Segments:");
    for segment in brackets.split(html)? {
        match segment {
            Segment::Literal(text) => println!("  literal {:?}", text),
            Segment::Match { text, inner } => println!("  match   {:?} -> {:?}", text, inner),
        }
    }

    // Byte offsets, usable to slice the input
    println!("\nSpans:");
    for span in brackets.spans(html)? {
        println!("  {:?} = {}", span.range(), &html[span.range()]);
    }

    // Escaped markers are not matches, and lose their escape in the output
    let escaped = brackets.split("array\\[0\\] is [first]")?;
    println!("\nEscaped: {:?}", escaped);

    Ok(())
}
