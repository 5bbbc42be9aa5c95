extern crate envprobe;
extern crate serde_json;

use envprobe::{Context, Value};

// Converting between Rust and script values.
fn main() {
    let mut ctx = Context::new(std::io::stdout());

    ctx.bind("true_", true);
    ctx.bind("false_", false);
    ctx.bind("integer", 100_000_000i64);
    ctx.bind("float", 100.525);
    ctx.bind("null", ());
    ctx.bind("string", "Hello, world!");
    ctx.bind("array", vec!["Hello", "world!"]);

    println!("Converting between Rust and script values:");
    for name in ["true_", "false_", "integer", "float", "null", "string", "array"] {
        let value = ctx.var(name).cloned().unwrap_or(Value::Null);
        println!(
            "{} = {:?} (echo: {:?}, json: {})",
            name,
            value,
            value.to_string(),
            serde_json::to_string(&value).unwrap()
        );
    }
}
