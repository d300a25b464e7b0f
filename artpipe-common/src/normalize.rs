//! Normalization of loosely-typed records into [`Article`]s
//!
//! Two modes exist because the two input origins disagree on how
//! `published` is read:
//! - [`NormalizeMode::Csv`]: the cell is matched case-insensitively
//!   against an accepted-truthy token set
//! - [`NormalizeMode::Record`]: absent means true, anything else goes
//!   through loose boolean coercion
//!
//! Normalization is pure: identical input always yields an identical article.

use serde_json::Value;

use crate::article::{Article, RawRecord};
use crate::slug::slugify;

/// Tokens accepted as "published" in CSV cells (compared lower-cased)
pub const CSV_TRUTHY_TOKENS: [&str; 5] = ["1", "true", "yes", "y", "on"];

/// Input origin, selecting defaults and `published` parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeMode {
    /// Row read from a CSV file
    Csv,
    /// Generated stub or JSON object
    Record,
}

impl NormalizeMode {
    /// Title used when the input has none
    pub fn default_title(self) -> &'static str {
        match self {
            NormalizeMode::Csv => "Sans titre",
            NormalizeMode::Record => "No Title",
        }
    }

    /// Author used when the input has none
    pub fn default_author(self) -> &'static str {
        match self {
            NormalizeMode::Csv => "N/A",
            NormalizeMode::Record => "Unknown",
        }
    }
}

/// Convert a raw record into the canonical article shape
pub fn normalize(raw: &RawRecord, mode: NormalizeMode) -> Article {
    let title = trimmed(raw.get("title")).unwrap_or_else(|| mode.default_title().to_string());
    let author = trimmed(raw.get("author")).unwrap_or_else(|| mode.default_author().to_string());
    let excerpt = trimmed(raw.get("excerpt"));
    let views = coerce_int(raw.get("views")).max(0) as u64;

    let published = match mode {
        NormalizeMode::Csv => parse_csv_flag(raw.get("published")),
        NormalizeMode::Record => match raw.get("published") {
            None | Some(Value::Null) => true,
            Some(value) => is_truthy(value),
        },
    };

    let slug = coerce_string(raw.get("slug"))
        .map(|s| slugify(&s))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| slugify(&title));

    Article {
        id: coerce_id(raw.get("id")),
        title,
        slug,
        excerpt,
        views,
        published,
        author,
        tags: coerce_tags(raw.get("tags")),
    }
}

/// CSV `published` cell: absent counts as "true", otherwise token match
pub fn parse_csv_flag(value: Option<&Value>) -> bool {
    let token = coerce_string(value).unwrap_or_else(|| "true".to_string());
    let token = token.trim().to_ascii_lowercase();
    CSV_TRUTHY_TOKENS.contains(&token.as_str())
}

/// Loose boolean coercion
///
/// False for `false`, `null`, zero, `""`, `"0"` and empty containers.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Loose string coercion; `None` for absent or null values
pub fn coerce_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(true) => Some("1".to_string()),
        Value::Bool(false) => Some(String::new()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// Loose integer coercion; absent and non-numeric input become 0
///
/// Strings contribute their leading integer prefix, floats are truncated.
pub fn coerce_int(value: Option<&Value>) -> i64 {
    match value {
        None | Some(Value::Null) => 0,
        Some(Value::Bool(b)) => i64::from(*b),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                i
            } else if n.as_u64().is_some() {
                i64::MAX
            } else {
                // `as` saturates and maps NaN to 0
                n.as_f64().map_or(0, |f| f as i64)
            }
        }
        Some(Value::String(s)) => leading_int(s.trim()),
        Some(_) => 0,
    }
}

fn leading_int(s: &str) -> i64 {
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut acc: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(b - b'0');
        acc = acc.saturating_mul(10).saturating_add(digit);
    }

    if negative {
        -acc
    } else {
        acc
    }
}

fn trimmed(value: Option<&Value>) -> Option<String> {
    coerce_string(value)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn coerce_id(value: Option<&Value>) -> Option<u64> {
    match value? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_tags(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| trimmed(Some(item)))
            .collect(),
        _ => Vec::new(),
    }
}
