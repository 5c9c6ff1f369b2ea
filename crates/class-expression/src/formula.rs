//! Boolean-formula evaluator for output-expression guards.

use crate::cursor::Cursor;
use crate::error::DecodeError;
use crate::styles::StyleTable;

const OP_NOT: i64 = -1;
const OP_OR: i64 = -2;
const OP_AND: i64 = -3;

/// Recursively evaluates one boolean formula against the style table.
///
/// A non-negative tag is a style-index reference; `-1`/`-2`/`-3` are
/// NOT/OR/AND. OR and AND never skip operands: every sub-formula is fully
/// decoded even once the result is known, so the cursor stays aligned for the
/// expressions that follow. Zero operands yield the operator's identity
/// (false for OR, true for AND).
pub fn eval_formula(cursor: &mut Cursor, styles: &StyleTable) -> Result<bool, DecodeError> {
    let tag = cursor.int()?;
    match tag {
        OP_NOT => Ok(!eval_formula(cursor, styles)?),
        OP_OR => {
            let operands = cursor.uint()?;
            let mut result = false;
            for _ in 0..operands {
                if eval_formula(cursor, styles)? {
                    result = true;
                }
            }
            Ok(result)
        }
        OP_AND => {
            let operands = cursor.uint()?;
            let mut result = true;
            for _ in 0..operands {
                if !eval_formula(cursor, styles)? {
                    result = false;
                }
            }
            Ok(result)
        }
        index if index >= 0 => Ok(styles.get(index as usize)),
        other => Err(DecodeError::UnrecognizedTag {
            context: "formula operator",
            tag: other,
        }),
    }
}
