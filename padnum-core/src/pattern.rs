use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Leading ASCII digit run followed by the verbatim remainder.
///
/// `(?s)` lets the remainder span newlines so nothing after the digits is
/// ever dropped from a name.
const LEADING_DIGITS: &str = r"(?s)\A([0-9]+)(.*)\z";

fn leading_digits_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(LEADING_DIGITS).expect("leading digit pattern is valid"))
}

/// A filename split around its leading digit run, with the padded form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddedName {
    pub original: String,
    pub digits: String,
    pub remainder: String,
    pub padded: String,
}

impl PaddedName {
    /// True when padding leaves the name as it was.
    pub fn is_unchanged(&self) -> bool {
        self.original == self.padded
    }
}

/// Split `name` into its leading digit run and remainder.
///
/// Returns `None` when the name does not start with a digit. Digits that
/// appear later in the name (`img_2024_1.png`) are not considered.
pub fn split_leading_digits(name: &str) -> Option<(&str, &str)> {
    let caps = leading_digits_regex().captures(name)?;
    let digits = caps.get(1)?.as_str();
    let remainder = caps.get(2).map_or("", |m| m.as_str());
    Some((digits, remainder))
}

/// Left-pad `digits` with `'0'` up to `width` characters. Never truncates.
pub fn pad_digits(digits: &str, width: usize) -> String {
    // `{:0>width$}` panics once width exceeds u16::MAX
    let mut padded = "0".repeat(width.saturating_sub(digits.len()));
    padded.push_str(digits);
    padded
}

/// Compute the padded form of `name`, or `None` if it has no leading digits.
pub fn pad_name(name: &str, width: usize) -> Option<PaddedName> {
    let (digits, remainder) = split_leading_digits(name)?;
    let padded = format!("{}{}", pad_digits(digits, width), remainder);

    Some(PaddedName {
        original: name.to_string(),
        digits: digits.to_string(),
        remainder: remainder.to_string(),
        padded,
    })
}

/// Case-insensitive suffix check used for the extension filter.
///
/// An empty filter matches everything.
pub fn matches_extension(name: &str, extension: &str) -> bool {
    extension.is_empty() || name.to_lowercase().ends_with(&extension.to_lowercase())
}
