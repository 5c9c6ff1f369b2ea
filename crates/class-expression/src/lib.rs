//! Evaluator for flat, stack-encoded conditional CSS class expressions.
//!
//! # Overview
//!
//! An external compiler flattens a set of boolean/string/ternary conditions
//! and class-name outputs into a single ordered sequence of primitive values
//! (numbers, strings, booleans). This crate consumes that sequence once, left
//! to right, with no backtracking: a first pass decodes "source expressions"
//! that assert boolean style flags, and a second pass decodes "output
//! expressions" that guard each class-name literal with a boolean formula over
//! those flags. The result is the space-joined list of emitted class names.
//!
//! # Example
//!
//! ```
//! use class_expression::evaluate_values;
//! use serde_json::json;
//!
//! // One boolean source expression (condition true, sets style 0), one
//! // output expression emitting "hidden" when style 0 is set.
//! let sequence = json!([1, 1, 2, true, 1, 0, "hidden", 0]);
//!
//! let Some(values) = sequence.as_array() else { unreachable!() };
//! let result = evaluate_values(values.clone()).unwrap();
//!
//! assert_eq!(result, "hidden");
//! ```

pub mod cursor;
pub mod error;
pub mod evaluate;
pub mod formula;
pub mod source;
pub mod styles;
pub mod types;
pub mod util;

// Re-export the core public API
pub use cursor::Cursor;
pub use error::DecodeError;
pub use evaluate::{evaluate, evaluate_values};
pub use styles::StyleTable;
pub use types::Primitive;
