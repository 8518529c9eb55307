//! Placeholder grammar (double-brace form)
//!
//! A placeholder is `{{key}}`, `{{key:type}}`, or `{{key:type:null}}` where
//! `key` is either a decimal sequence index or a dotted identifier path.
//! Matching is case-insensitive and scans the whole template in one pass.
//!
//! Single-brace `{key}` text is a legacy literal form: it is never a match
//! here, so it survives substitution byte-for-byte. This lets one template
//! mix substitution placeholders with literal brace text such as glob
//! patterns (`"*.{json,md}"`).

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// Pattern for `{{index}}` or `{{identifier.path}}` with optional `:type`
/// and `:null` suffixes. Path segments allow word chars, `-`, `$`, and `*`
/// (wildcard segments are grammar-valid but resolve as plain field names).
static PLACEHOLDER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\{\{(\d+|[a-z$_][\w\-$]*?(?:\.[\w\-$*]*?)*?)(?::(int|bool|num|str|any|json))?(?::(null))?\}\}",
    )
    .unwrap()
});

/// Coercion selector parsed from a placeholder's `:type` suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    Int,
    Bool,
    Num,
    Str,
    Any,
    Json,
}

impl TypeTag {
    fn parse(tag: &str) -> Option<TypeTag> {
        match tag.to_ascii_lowercase().as_str() {
            "int" => Some(TypeTag::Int),
            "bool" => Some(TypeTag::Bool),
            "num" => Some(TypeTag::Num),
            "str" => Some(TypeTag::Str),
            "any" => Some(TypeTag::Any),
            "json" => Some(TypeTag::Json),
            _ => None,
        }
    }
}

/// One parsed placeholder occurrence
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder<'t> {
    /// Exact substring matched in the template, e.g. `{{a.b:int}}`.
    /// Substituted back verbatim when the placeholder stays unresolved
    /// under [`MissingKeys::Ignore`](crate::MissingKeys::Ignore).
    pub raw: &'t str,
    /// Path portion only; the grammar strips `:type`/`:null` suffixes
    pub key: &'t str,
    pub type_tag: Option<TypeTag>,
    pub null_tag: bool,
}

/// Scan the template left-to-right for all double-brace placeholders.
///
/// Returns each match's byte range alongside its parsed form. An empty
/// result means the template must pass through unchanged.
pub fn scan(template: &str) -> Vec<(Range<usize>, Placeholder<'_>)> {
    PLACEHOLDER_PATTERN
        .captures_iter(template)
        .map(|caps| {
            let whole = caps.get(0).expect("capture 0 always present");
            let key = caps.get(1).map(|k| k.as_str()).unwrap_or_default();
            let type_tag = caps.get(2).and_then(|t| TypeTag::parse(t.as_str()));
            let null_tag = caps.get(3).is_some();
            (
                whole.range(),
                Placeholder {
                    raw: whole.as_str(),
                    key,
                    type_tag,
                    null_tag,
                },
            )
        })
        .collect()
}
