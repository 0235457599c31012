//! Filling templates from a payload or a closure.
//!
//! Run with: cargo run --example templates

use std::collections::HashMap;
use std::error::Error;
use texts_between::{value, TextsBetween};

fn main() -> Result<(), Box<dyn Error>> {
    let pattern = TextsBetween::new("{{", "}}")?;
    let template = "Order #{{order.id}} for {{customer}}:\n\
                    - {{order.items[0].sku}} x{{order.items[0].qty}}\n\
                    - {{order.items[1].sku}} x{{order.items[1].qty}}\n\
                    Note: {{note}}{{unknown}}";

    // Values are looked up by key, then by key path
    let data = value!({
        "customer": "Ada",
        "order": {
            "id": 1001,
            "items": [
                { "sku": "W-1", "qty": 2 },
                { "sku": "G-9", "qty": 1 }
            ]
        },
        "note": null
    });
    println!("Payload: {}\n", data);
    println!("{}\n", pattern.replace(template, &data)?);

    // Any closure returning text works too; `None` removes the match
    let vars: HashMap<&str, &str> = [("greeting", "Hello"), ("name", "world")].into();
    let brackets = TextsBetween::new("[", "]")?;
    let out = brackets.replace("[greeting], [name][missing]!", |key: &str| {
        vars.get(key).copied()
    })?;
    println!("Closure: {}", out);
    assert_eq!(out, "Hello, world!");

    // Parse once, fill many times
    let parsed = brackets.parse("[greeting], [name]!")?;
    for name in ["Ada", "Grace"] {
        let line = parsed.replace(|key: &str| if key == "name" { name } else { "Hi" });
        println!("{}", line);
    }

    Ok(())
}
