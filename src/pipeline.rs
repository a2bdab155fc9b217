//! Reader → Decoder → Computation → Writer.
//!
//! Each stage is a plain function over its input so it can be driven from
//! in-memory buffers. [`run`] chains them and stops at the first error.

use crate::error::{AddError, JsonKind};
use crate::number::Number;
use serde_json::Value;
use std::io::{Read, Write};
use tracing::debug;

/// Read the whole stream as UTF-8 text.
pub fn read_input<R: Read>(mut input: R) -> Result<String, AddError> {
    let mut text = String::new();
    input.read_to_string(&mut text).map_err(AddError::Read)?;
    debug!(bytes = text.len(), "input read");
    Ok(text)
}

pub fn decode(text: &str) -> Result<Value, AddError> {
    let document: Value = serde_json::from_str(text)?;
    debug!(kind = %JsonKind::of(&document), "input decoded");
    Ok(document)
}

/// Look up `a` and `b` and add them.
///
/// Both keys are resolved before either value is type-checked, so a document
/// missing `b` reports the missing key even when `a` is not a number.
pub fn compute(document: &Value) -> Result<Number, AddError> {
    let Value::Object(fields) = document else {
        return Err(AddError::NotAnObject {
            found: JsonKind::of(document),
        });
    };

    let a = fields.get("a").ok_or(AddError::MissingField("a"))?;
    let b = fields.get("b").ok_or(AddError::MissingField("b"))?;

    let a = operand("a", a)?;
    let b = operand("b", b)?;
    let sum = a + b;

    debug!(?a, ?b, ?sum, "operands added");
    Ok(sum)
}

fn operand(field: &'static str, value: &Value) -> Result<Number, AddError> {
    Number::from_json(value).ok_or(AddError::Type {
        field,
        found: JsonKind::of(value),
    })
}

pub fn write_sum<W: Write>(mut output: W, sum: Number) -> Result<(), AddError> {
    writeln!(output, "{sum}").map_err(AddError::Write)?;
    output.flush().map_err(AddError::Write)
}

/// Run the full pipeline. Nothing is written to `output` unless every
/// earlier stage succeeded.
pub fn run<R: Read, W: Write>(input: R, output: W) -> Result<Number, AddError> {
    let text = read_input(input)?;
    let document = decode(&text)?;
    let sum = compute(&document)?;
    write_sum(output, sum)?;
    Ok(sum)
}
