//! Single-pass cursor over an encoded primitive sequence.

use crate::error::DecodeError;
use crate::types::Primitive;
use crate::util::{is_truthy, string_form};

/// A destructive reader over an owned primitive sequence.
///
/// The cursor advances a position over the owned buffer instead of shifting
/// elements off the front, which keeps the "each read removes the front
/// element" contract without reallocating. There is no lookahead and no
/// rewind; every read consumes exactly one value.
///
/// # Example
///
/// ```
/// use class_expression::{Cursor, Primitive};
///
/// let mut cursor = Cursor::new(vec![Primitive::from(2), Primitive::from("a")]);
///
/// assert_eq!(cursor.number().unwrap(), 2.0);
/// assert_eq!(cursor.string().unwrap(), "a");
/// assert_eq!(cursor.size(), 0);
/// ```
pub struct Cursor {
    values: Vec<Primitive>,
    /// Current position.
    x: usize,
}

impl Cursor {
    /// Creates a cursor over the given sequence.
    pub fn new(values: Vec<Primitive>) -> Self {
        Self { values, x: 0 }
    }

    /// Returns the number of unread values.
    pub fn size(&self) -> usize {
        self.values.len() - self.x
    }

    /// Reads the next value, whatever its kind.
    fn next(&mut self) -> Result<&Primitive, DecodeError> {
        let value = self.values.get(self.x).ok_or(DecodeError::Underflow)?;
        self.x += 1;
        Ok(value)
    }

    /// Reads a numeric value.
    pub fn number(&mut self) -> Result<f64, DecodeError> {
        match self.next()? {
            Primitive::Num(n) => Ok(*n),
            other => Err(DecodeError::TypeMismatch {
                expected: "number",
                found: other.kind(),
            }),
        }
    }

    /// Reads a numeric value as a signed integer tag.
    pub fn int(&mut self) -> Result<i64, DecodeError> {
        Ok(self.number()? as i64)
    }

    /// Reads a numeric value as a count or style index. Negative numbers
    /// saturate to zero; producer-assigned indices are never range-checked.
    pub fn uint(&mut self) -> Result<usize, DecodeError> {
        Ok(self.number()? as usize)
    }

    /// Reads any value coerced to its string form.
    pub fn string(&mut self) -> Result<String, DecodeError> {
        let value = self.next()?;
        Ok(string_form(value))
    }

    /// Reads any value coerced to a boolean.
    pub fn boolean(&mut self) -> Result<bool, DecodeError> {
        let value = self.next()?;
        Ok(is_truthy(value))
    }

    /// Reads a value that may be "absent" in the producer's sense: the empty
    /// string and boolean `false` read as `None`, while every number is
    /// present (numeric zero is a valid discriminant and yields `"0"`).
    pub fn truthy_or_absent(&mut self) -> Result<Option<String>, DecodeError> {
        let value = self.next()?;
        match value {
            Primitive::Str(s) if s.is_empty() => Ok(None),
            Primitive::Bool(false) => Ok(None),
            present => Ok(Some(string_form(present))),
        }
    }
}
