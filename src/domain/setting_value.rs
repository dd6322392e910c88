// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed settings values and the raw-value classification rules.
//!
//! This module provides the `SettingValue` type, a tagged union over the
//! value shapes a settings file can carry, and the `ValueParser` that turns
//! one raw string into exactly one `SettingValue` using a fixed precedence
//! of pattern checks.

use serde::{Deserialize, Serialize};

/// A typed settings value.
///
/// Every raw string read from a settings file classifies into exactly one of
/// these variants. Structured literals keep their full nested shape as a
/// [`serde_json::Value`]; comma lists are ordered sequences of *strings* —
/// list elements are never coerced to numbers or booleans.
///
/// # Examples
///
/// ```
/// use tabkit::domain::setting_value::{SettingValue, ValueParser};
///
/// let parser = ValueParser::new();
/// assert_eq!(parser.parse("42").value, SettingValue::Int(42));
/// assert_eq!(parser.parse("hello").value, SettingValue::Str("hello".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// A bare `true`/`false` token (case-insensitive).
    Bool(bool),
    /// A whole number without sign, exponent, or separators.
    Int(i64),
    /// A decimal number containing exactly one `.`.
    Float(f64),
    /// Any value no earlier rule claimed, kept verbatim.
    Str(String),
    /// A comma-separated sequence, each element whitespace-trimmed.
    List(Vec<String>),
    /// A successfully parsed bracketed literal.
    Structured(serde_json::Value),
}

impl SettingValue {
    /// Returns the boolean if this is a [`SettingValue::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the integer if this is a [`SettingValue::Int`].
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SettingValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the number as `f64` if this is a [`SettingValue::Float`] or
    /// [`SettingValue::Int`].
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SettingValue::Float(value) => Some(*value),
            SettingValue::Int(value) => Some(*value as f64),
            _ => None,
        }
    }

    /// Returns the string slice if this is a [`SettingValue::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::Str(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the list elements if this is a [`SettingValue::List`].
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            SettingValue::List(values) => Some(values),
            _ => None,
        }
    }

    /// Returns the nested literal if this is a [`SettingValue::Structured`].
    pub fn as_structured(&self) -> Option<&serde_json::Value> {
        match self {
            SettingValue::Structured(value) => Some(value),
            _ => None,
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        SettingValue::Int(value)
    }
}

impl From<f64> for SettingValue {
    fn from(value: f64) -> Self {
        SettingValue::Float(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Str(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::Str(value)
    }
}

impl From<Vec<String>> for SettingValue {
    fn from(values: Vec<String>) -> Self {
        SettingValue::List(values)
    }
}

impl From<serde_json::Value> for SettingValue {
    fn from(value: serde_json::Value) -> Self {
        SettingValue::Structured(value)
    }
}

/// Controls whether a value that looks like failed structured data may still
/// be split into a comma list.
///
/// Two historical behaviors exist for values such as `{not valid, json}`:
/// the older one comma-splits them anyway, producing a bogus partial list;
/// the newer one keeps them whole. The stricter behavior is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListSplitPolicy {
    /// Comma-split any unclaimed value containing a comma.
    Legacy,
    /// Exclude values containing `{`, `[`, or `(` from the list check.
    #[default]
    Strict,
}

/// The result of classifying one raw value.
///
/// A structured-looking value that fails to parse degrades to a scalar
/// classification and carries the parse error text here so the caller can
/// report it; the failure itself is never propagated.
#[derive(Clone, Debug)]
pub struct ParseOutcome {
    /// The classified value.
    pub value: SettingValue,
    /// The structural parse error, when a bracketed value fell through.
    pub structural_warning: Option<String>,
}

/// Classifies raw settings strings into [`SettingValue`]s.
///
/// Classification applies a strict, ordered sequence of checks; the first
/// matching rule wins:
///
/// 1. **Structured literal** — a value wrapped in `{…}`, `[…]`, or `(…)` is
///    parsed as a nested JSON literal (parenthesized values are read as
///    sequences). Before parsing, `True`/`False` tokens in structural
///    positions are normalized to the `true`/`false` spelling the structural
///    parser expects. On failure the error is recorded and classification
///    continues.
/// 2. **Boolean** — the lowercase form is exactly `true` or `false`.
/// 3. **Numeric** — after removing at most one `.`, only ASCII decimal
///    digits remain: `Float` if the value contains a `.`, otherwise `Int`.
/// 4. **List** — the value contains a comma (subject to the
///    [`ListSplitPolicy`]); elements are trimmed but stay strings.
/// 5. **Fallback** — the value is kept verbatim as a string.
///
/// # Known limitations
///
/// These are deliberate and match the documented file format; do not widen
/// them:
///
/// - The numeric rule rejects leading `-`, scientific notation, and
///   thousands separators; such values classify as lists or strings.
///   Non-ASCII digits are not numeric, and an unsigned integer too large
///   for `i64` falls through to the later rules.
/// - Boolean-token normalization is textual. A `True` in a structural
///   position *inside a quoted string* is also rewritten; values relying on
///   that exact spelling should avoid the leading space/`:`/`,`/`[`/`{`.
/// - Parenthesized literals are only recognized at the outermost level;
///   nested tuples degrade through the structural-failure path.
///
/// # Examples
///
/// ```
/// use tabkit::domain::setting_value::{SettingValue, ValueParser};
///
/// let parser = ValueParser::new();
///
/// let outcome = parser.parse("{\"enabled\": true, \"n\": 3}");
/// assert!(matches!(outcome.value, SettingValue::Structured(_)));
///
/// let outcome = parser.parse("A, B ,C");
/// assert_eq!(
///     outcome.value,
///     SettingValue::List(vec!["A".into(), "B".into(), "C".into()])
/// );
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ValueParser {
    list_policy: ListSplitPolicy,
}

impl ValueParser {
    /// Creates a parser with the default (strict) list policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with an explicit list policy.
    pub fn with_policy(list_policy: ListSplitPolicy) -> Self {
        ValueParser { list_policy }
    }

    /// Returns the configured list policy.
    pub fn list_policy(&self) -> ListSplitPolicy {
        self.list_policy
    }

    /// Classifies one raw value.
    ///
    /// `raw` is expected to be trimmed of surrounding whitespace already, as
    /// settings readers deliver it. The classification is a pure function of
    /// the text; the same input always yields the same outcome.
    pub fn parse(&self, raw: &str) -> ParseOutcome {
        let mut structural_warning = None;

        if looks_structured(raw) {
            match parse_structured(raw) {
                Ok(value) => {
                    return ParseOutcome {
                        value: SettingValue::Structured(value),
                        structural_warning: None,
                    }
                }
                Err(err) => structural_warning = Some(err.to_string()),
            }
        }

        ParseOutcome {
            value: self.classify_scalar(raw),
            structural_warning,
        }
    }

    fn classify_scalar(&self, raw: &str) -> SettingValue {
        let lowered = raw.to_lowercase();
        if lowered == "true" {
            return SettingValue::Bool(true);
        }
        if lowered == "false" {
            return SettingValue::Bool(false);
        }

        let digits = raw.replacen('.', "", 1);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            if raw.contains('.') {
                if let Ok(value) = raw.parse::<f64>() {
                    return SettingValue::Float(value);
                }
            } else if let Ok(value) = raw.parse::<i64>() {
                return SettingValue::Int(value);
            }
        }

        if raw.contains(',') && self.list_split_allowed(raw) {
            let items = raw.split(',').map(|item| item.trim().to_string()).collect();
            return SettingValue::List(items);
        }

        SettingValue::Str(raw.to_string())
    }

    fn list_split_allowed(&self, raw: &str) -> bool {
        match self.list_policy {
            ListSplitPolicy::Legacy => true,
            ListSplitPolicy::Strict => !raw.contains(['{', '[', '(']),
        }
    }
}

fn looks_structured(raw: &str) -> bool {
    (raw.starts_with('{') && raw.ends_with('}'))
        || (raw.starts_with('[') && raw.ends_with(']'))
        || (raw.starts_with('(') && raw.ends_with(')'))
}

fn parse_structured(raw: &str) -> serde_json::Result<serde_json::Value> {
    let normalized = normalize_bool_tokens(raw);
    let candidate = if normalized.starts_with('(') && normalized.ends_with(')') {
        format!("[{}]", &normalized[1..normalized.len() - 1])
    } else {
        normalized
    };
    serde_json::from_str(&candidate)
}

// Textual normalization: a boolean token counts as structural when it is
// immediately preceded by a space, ':', ',', '[', or '{'.
fn normalize_bool_tokens(raw: &str) -> String {
    const REWRITES: [(&str, &str); 10] = [
        (" True", " true"),
        (":True", ":true"),
        (",True", ",true"),
        ("[True", "[true"),
        ("{True", "{true"),
        (" False", " false"),
        (":False", ":false"),
        (",False", ",false"),
        ("[False", "[false"),
        ("{False", "{false"),
    ];

    let mut text = raw.to_string();
    for (from, to) in REWRITES {
        text = text.replace(from, to);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(raw: &str) -> SettingValue {
        ValueParser::new().parse(raw).value
    }

    #[test]
    fn test_bool_recognition_is_case_insensitive() {
        assert_eq!(parse("true"), SettingValue::Bool(true));
        assert_eq!(parse("True"), SettingValue::Bool(true));
        assert_eq!(parse("FALSE"), SettingValue::Bool(false));
    }

    #[test]
    fn test_integer_and_float() {
        assert_eq!(parse("42"), SettingValue::Int(42));
        assert_eq!(parse("3.14"), SettingValue::Float(3.14));
        assert_eq!(parse("10."), SettingValue::Float(10.0));
        assert_eq!(parse(".5"), SettingValue::Float(0.5));
    }

    #[test]
    fn test_two_dots_is_not_numeric() {
        assert_eq!(parse("1.2.3"), SettingValue::Str("1.2.3".to_string()));
    }

    #[test]
    fn test_negative_and_scientific_fall_through() {
        assert_eq!(parse("-42"), SettingValue::Str("-42".to_string()));
        assert_eq!(parse("1e6"), SettingValue::Str("1e6".to_string()));
        assert_eq!(
            parse("1,000"),
            SettingValue::List(vec!["1".to_string(), "000".to_string()])
        );
    }

    #[test]
    fn test_i64_overflow_falls_through() {
        let huge = "99999999999999999999999999";
        assert_eq!(parse(huge), SettingValue::Str(huge.to_string()));
    }

    #[test]
    fn test_list_splits_and_trims() {
        assert_eq!(
            parse("A,B,C"),
            SettingValue::List(vec!["A".into(), "B".into(), "C".into()])
        );
        assert_eq!(
            parse("A, B ,C"),
            SettingValue::List(vec!["A".into(), "B".into(), "C".into()])
        );
    }

    #[test]
    fn test_list_elements_stay_strings() {
        assert_eq!(
            parse("10,20,30"),
            SettingValue::List(vec!["10".into(), "20".into(), "30".into()])
        );
    }

    #[test]
    fn test_empty_string_is_empty_str() {
        assert_eq!(parse(""), SettingValue::Str(String::new()));
    }

    #[test]
    fn test_structured_object() {
        assert_eq!(
            parse("{\"enabled\": true, \"n\": 3}"),
            SettingValue::Structured(json!({"enabled": true, "n": 3}))
        );
    }

    #[test]
    fn test_structured_array_and_tuple() {
        assert_eq!(
            parse("[1, 2, 3]"),
            SettingValue::Structured(json!([1, 2, 3]))
        );
        assert_eq!(
            parse("(1, 2, 3)"),
            SettingValue::Structured(json!([1, 2, 3]))
        );
        assert_eq!(parse("()"), SettingValue::Structured(json!([])));
    }

    #[test]
    fn test_capitalized_bool_tokens_normalize() {
        assert_eq!(
            parse("{\"enabled\": True, \"flags\": [False, True]}"),
            SettingValue::Structured(json!({"enabled": true, "flags": [false, true]}))
        );
    }

    #[test]
    fn test_normalization_rewrites_inside_quoted_strings() {
        // Known limitation of the textual rewrite: a structural-position
        // token inside a string literal is rewritten too.
        assert_eq!(
            parse("{\"note\": \"a True story\"}"),
            SettingValue::Structured(json!({"note": "a true story"}))
        );
    }

    #[test]
    fn test_structured_wins_over_list() {
        // A parseable bracketed value never reaches the comma-split rule.
        assert_eq!(
            parse("[\"a\", \"b\"]"),
            SettingValue::Structured(json!(["a", "b"]))
        );
    }

    #[test]
    fn test_structural_failure_reports_warning() {
        let outcome = ValueParser::new().parse("{not valid json}");
        assert!(outcome.structural_warning.is_some());
        assert_eq!(
            outcome.value,
            SettingValue::Str("{not valid json}".to_string())
        );
    }

    #[test]
    fn test_structural_success_has_no_warning() {
        let outcome = ValueParser::new().parse("{\"a\": 1}");
        assert!(outcome.structural_warning.is_none());
    }

    #[test]
    fn test_list_policy_divergence_on_failed_structured() {
        let raw = "{a, b}";

        let strict = ValueParser::with_policy(ListSplitPolicy::Strict).parse(raw);
        assert_eq!(strict.value, SettingValue::Str(raw.to_string()));
        assert!(strict.structural_warning.is_some());

        let legacy = ValueParser::with_policy(ListSplitPolicy::Legacy).parse(raw);
        assert_eq!(
            legacy.value,
            SettingValue::List(vec!["{a".to_string(), "b}".to_string()])
        );
        assert!(legacy.structural_warning.is_some());
    }

    #[test]
    fn test_structured_round_trip() {
        let raw = "{\"widths\": [12, 20], \"title\": \"Report\", \"on\": true}";
        let first = parse(raw);
        let reserialized = serde_json::to_string(first.as_structured().unwrap()).unwrap();
        let second = parse(&reserialized);
        assert_eq!(first, second);
    }

    #[test]
    fn test_accessors() {
        assert_eq!(parse("true").as_bool(), Some(true));
        assert_eq!(parse("7").as_i64(), Some(7));
        assert_eq!(parse("7").as_f64(), Some(7.0));
        assert_eq!(parse("2.5").as_f64(), Some(2.5));
        assert_eq!(parse("plain").as_str(), Some("plain"));
        assert_eq!(
            parse("x,y").as_list(),
            Some(&["x".to_string(), "y".to_string()][..])
        );
        assert!(parse("plain").as_bool().is_none());
    }

    #[test]
    fn test_from_impls() {
        assert_eq!(SettingValue::from(true), SettingValue::Bool(true));
        assert_eq!(SettingValue::from(3i64), SettingValue::Int(3));
        assert_eq!(SettingValue::from(3.5f64), SettingValue::Float(3.5));
        assert_eq!(
            SettingValue::from("text"),
            SettingValue::Str("text".to_string())
        );
    }
}
