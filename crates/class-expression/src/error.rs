use thiserror::Error;

/// Errors raised while decoding an encoded class-expression sequence.
///
/// Every error is fatal to the evaluation call that raised it; there is no
/// partial result and no recovery. A failing input fails identically on every
/// run, since the sequence is immutable and decoding is deterministic.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// A read was attempted against an exhausted cursor.
    #[error("unexpected end of input")]
    Underflow,

    /// A read expected one primitive kind and found another.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A switch discriminant was absent under the error falsy-policy.
    #[error("expected a string discriminant")]
    ExpectedString,

    /// A discriminant numeral did not match any defined case.
    #[error("unrecognized {context} tag: {tag}")]
    UnrecognizedTag { context: &'static str, tag: i64 },
}
