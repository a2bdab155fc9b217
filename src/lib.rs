//! add-two: sum the `a` and `b` fields of a JSON object read from stdin
//!
//! The whole program is a single linear pipeline:
//! 1. Read the full input stream as UTF-8 text
//! 2. Decode it as a JSON document
//! 3. Look up `a` and `b` and add them with numeric promotion
//! 4. Write the sum followed by a newline
//!
//! Integer operands stay integers (`5 + 7` prints `12`); any float operand
//! promotes the result (`0.5 + 0.5` prints `1.0`).

pub mod error;
pub mod logging;
pub mod number;
pub mod pipeline;

pub use error::{AddError, ErrorKind};
pub use number::Number;
pub use pipeline::run;
