//! The substitution pass and whole-template finalization
//!
//! Control flow is linear: validate the data shape, scan for placeholders,
//! then for each match resolve → transform → substitute textually. The
//! first matched placeholder's tags decide the return type of the whole
//! assembled result; a template with no double-brace placeholder passes
//! through unchanged.

use serde_json::Value;
use tracing::{debug, trace};

use crate::coerce::{self, UNDEFINED};
use crate::error::Error;
use crate::grammar::{self, Placeholder};
use crate::keypath;

/// What to substitute when a placeholder resolves to nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingKeys {
    /// Substitute the literal text `undefined` (default)
    #[default]
    Undefined,
    /// Leave the raw placeholder text untouched
    Ignore,
    /// Fail with [`Error::MissingValue`]
    Error,
}

/// Post-resolution hook: receives the resolved value (if any) and the key,
/// returns the value to substitute. Returning `None` marks the placeholder
/// as missing.
pub type Transform<'a> = Box<dyn Fn(Option<Value>, &str) -> Option<Value> + 'a>;

/// Interpolation options
#[derive(Default)]
pub struct Options<'a> {
    missing_keys: MissingKeys,
    transform: Option<Transform<'a>>,
}

impl<'a> Options<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the missing-value policy.
    pub fn missing_keys(mut self, policy: MissingKeys) -> Self {
        self.missing_keys = policy;
        self
    }

    /// Convenience: `true` maps to [`MissingKeys::Ignore`], `false` to the
    /// default policy.
    pub fn ignore_missing(self, ignore: bool) -> Self {
        self.missing_keys(if ignore {
            MissingKeys::Ignore
        } else {
            MissingKeys::Undefined
        })
    }

    /// Install a post-resolution transform. Identity when absent.
    pub fn transform(mut self, hook: impl Fn(Option<Value>, &str) -> Option<Value> + 'a) -> Self {
        self.transform = Some(Box::new(hook));
        self
    }
}

/// Interpolate with default options.
pub fn interpolate(template: &str, data: &Value) -> Result<Value, Error> {
    interpolate_with(template, data, &Options::new())
}

/// Interpolate `{{...}}` placeholders in `template` against `data`.
///
/// Returns a string unless the first placeholder carries a type tag or a
/// `:null` modifier, in which case the whole assembled result is coerced.
/// With several differently tagged placeholders the first tag still decides
/// the overall return type; typed templates are expected to be a single
/// placeholder.
pub fn interpolate_with(
    template: &str,
    data: &Value,
    options: &Options<'_>,
) -> Result<Value, Error> {
    if !data.is_object() && !data.is_array() {
        return Err(Error::InvalidData {
            got: value_shape(data),
        });
    }

    let placeholders = grammar::scan(template);
    if placeholders.is_empty() {
        trace!("no placeholders, template passes through");
        return Ok(Value::String(template.to_string()));
    }

    let (type_tag, null_tag) = {
        let first = &placeholders[0].1;
        (first.type_tag, first.null_tag)
    };

    let mut out = String::with_capacity(template.len());
    let mut cursor = 0;

    for (range, placeholder) in &placeholders {
        out.push_str(&template[cursor..range.start]);
        substitute(&mut out, placeholder, data, options)?;
        cursor = range.end;
    }
    out.push_str(&template[cursor..]);

    Ok(coerce::finalize(out, type_tag, null_tag))
}

fn substitute(
    out: &mut String,
    placeholder: &Placeholder<'_>,
    data: &Value,
    options: &Options<'_>,
) -> Result<(), Error> {
    let resolved = keypath::resolve(data, placeholder.key);
    trace!(key = placeholder.key, resolved = resolved.is_some());

    let value = match &options.transform {
        Some(transform) => transform(resolved, placeholder.key),
        None => resolved,
    };

    match value {
        Some(value) => push_text_form(out, &value),
        None => match options.missing_keys {
            MissingKeys::Undefined => out.push_str(UNDEFINED),
            MissingKeys::Ignore => {
                debug!(key = placeholder.key, "unresolved placeholder left verbatim");
                out.push_str(placeholder.raw);
            }
            MissingKeys::Error => {
                return Err(Error::MissingValue {
                    key: placeholder.key.to_string(),
                })
            }
        },
    }

    Ok(())
}

/// Inline textual form: strings verbatim (no quotes), everything else via
/// its compact JSON encoding so nested structures serialize losslessly.
fn push_text_form(out: &mut String, value: &Value) {
    match value {
        Value::String(text) => out.push_str(text),
        other => out.push_str(&other.to_string()),
    }
}

fn value_shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Object(_) | Value::Array(_) => "an object",
    }
}
