//! The main `evaluate` entry point: one pass over the encoded sequence.

use serde_json::Value;

use crate::cursor::Cursor;
use crate::error::DecodeError;
use crate::formula::eval_formula;
use crate::source::eval_source_expression;
use crate::styles::StyleTable;
use crate::types::Primitive;

/// Evaluates an encoded class-expression sequence to its space-joined
/// class-name string.
///
/// The sequence opens with two counts (source expressions, then output
/// expressions). All source expressions are drained first, populating the
/// style table; the output pass then reads one class-name literal and one
/// boolean formula per output expression, emitting the name when the formula
/// holds. Declaration order is evaluation order and output order.
///
/// No output expression evaluating true yields the empty string.
pub fn evaluate(input: Vec<Primitive>) -> Result<String, DecodeError> {
    let mut cursor = Cursor::new(input);
    let mut styles = StyleTable::new();

    let source_count = cursor.uint()?;
    let output_count = cursor.uint()?;

    for _ in 0..source_count {
        eval_source_expression(&mut cursor, &mut styles)?;
    }

    let mut classes: Vec<String> = Vec::new();
    for _ in 0..output_count {
        let name = cursor.string()?;
        if eval_formula(&mut cursor, &styles)? {
            classes.push(name);
        }
    }
    Ok(classes.join(" "))
}

/// Convenience wrapper for hosts holding the sequence as JSON values.
///
/// Rejects null, array, and object elements at the boundary; numbers, strings,
/// and booleans convert losslessly.
pub fn evaluate_values(input: Vec<Value>) -> Result<String, DecodeError> {
    let primitives = input
        .into_iter()
        .map(Primitive::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    evaluate(primitives)
}
