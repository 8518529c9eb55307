//! Fillin - template placeholder interpolation
//!
//! Substitutes `{{...}}` placeholders in a template string against a JSON
//! data source. Placeholders carry dotted key paths, optional type tags
//! (`int`, `bool`, `num`, `str`, `any`, `json`), and an optional `:null`
//! modifier. Single-brace `{...}` text is never substituted.
//!
//! ```
//! use fillin::interpolate;
//! use serde_json::json;
//!
//! let out = interpolate("yo {{name}} sup", &json!({"name": "unicorn"})).unwrap();
//! assert_eq!(out, json!("yo unicorn sup"));
//! ```

pub mod coerce;
pub mod error;
pub mod grammar;
pub mod interpolate;
pub mod keypath;

pub use error::{Error, FixSuggestion};
pub use grammar::{Placeholder, TypeTag};
pub use interpolate::{interpolate, interpolate_with, MissingKeys, Options};
pub use serde_json::Value;
