//! Source-expression evaluator — the pass that populates the style table.
//!
//! Each source expression starts with a type tag whose bits select the shape
//! of its payload. Suppression is threaded as an explicit `suppressed` flag
//! scoped to one expression: once a dependency or condition check fails, all
//! later set requests within the same expression become no-ops, but every
//! token the expression's grammar names is still consumed so that whatever
//! follows on the cursor stays aligned.

use crate::cursor::Cursor;
use crate::error::DecodeError;
use crate::styles::StyleTable;

/// Type-tag bit: the expression opens with a dependency check.
pub const TYPE_DEPENDENCY: i64 = 1;
/// Type-tag bit: the expression is gated by one boolean condition.
pub const TYPE_BOOLEAN: i64 = 2;
/// Type-tag bit: the expression is a string switch over match arms.
pub const TYPE_SWITCH: i64 = 4;

/// Falsy-policy for an absent switch discriminant: fail the evaluation.
const POLICY_ERROR: i64 = 0;
/// Falsy-policy: suppress all arms, decode them anyway.
const POLICY_UNSET: i64 = 1;
/// Falsy-policy: read a literal default string as the discriminant.
const POLICY_DEFAULT: i64 = 2;

/// Consumes exactly one source expression and updates the style table.
pub fn eval_source_expression(
    cursor: &mut Cursor,
    styles: &mut StyleTable,
) -> Result<(), DecodeError> {
    let kind = cursor.int()?;
    let mut suppressed = false;

    if kind & TYPE_DEPENDENCY != 0 {
        let deps = cursor.uint()?;
        for _ in 0..deps {
            let index = cursor.uint()?;
            if !styles.get(index) {
                suppressed = true;
            }
        }
    }

    if kind & TYPE_SWITCH != 0 {
        eval_switch(cursor, styles, suppressed)
    } else if kind & TYPE_BOOLEAN != 0 {
        if !cursor.boolean()? {
            suppressed = true;
        }
        set_style_list(cursor, styles, !suppressed)
    } else if kind == 0 {
        // Ternary: both branch lists are always consumed, only one is applied.
        let condition = cursor.boolean()?;
        set_style_list(cursor, styles, condition && !suppressed)?;
        set_style_list(cursor, styles, !condition && !suppressed)
    } else {
        // Any remaining tag (e.g. a bare dependency check) carries a plain
        // style list. Deliberately permissive: the grammar accepts a superset
        // of what any known producer emits.
        set_style_list(cursor, styles, !suppressed)
    }
}

/// Reads a count followed by that many style indices. Every index is consumed;
/// each is asserted only when `enabled` holds.
fn set_style_list(
    cursor: &mut Cursor,
    styles: &mut StyleTable,
    enabled: bool,
) -> Result<(), DecodeError> {
    let count = cursor.uint()?;
    for _ in 0..count {
        let index = cursor.uint()?;
        if enabled {
            styles.set(index);
        }
    }
    Ok(())
}

fn eval_switch(
    cursor: &mut Cursor,
    styles: &mut StyleTable,
    mut suppressed: bool,
) -> Result<(), DecodeError> {
    let arms = cursor.uint()?;
    let policy = cursor.int()?;
    let discriminant = match cursor.truthy_or_absent()? {
        Some(value) => Some(value),
        None => match policy {
            POLICY_DEFAULT => Some(cursor.string()?),
            POLICY_ERROR => return Err(DecodeError::ExpectedString),
            POLICY_UNSET => {
                // No arm can match, but all arms are still decoded below.
                suppressed = true;
                None
            }
            other => {
                return Err(DecodeError::UnrecognizedTag {
                    context: "switch falsy-policy",
                    tag: other,
                })
            }
        },
    };

    for _ in 0..arms {
        let literal = cursor.string()?;
        let matched = !suppressed && discriminant.as_deref() == Some(literal.as_str());
        set_style_list(cursor, styles, matched)?;
    }
    Ok(())
}
