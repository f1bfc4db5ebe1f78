use std::sync::OnceLock;

use regex::Regex;

fn leading_int() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*([+-]?[0-9]+)").expect("valid regex"))
}

/// Coerce user input to an integer the way a browser's `parseInt(s, 10)`
/// does: skip leading whitespace, take an optional sign and the longest run
/// of decimal digits, ignore whatever follows. Returns `None` when there are
/// no leading digits or the value does not fit in an `i64`.
pub fn parse_int(input: &str) -> Option<i64> {
    let caps = leading_int().captures(input)?;
    caps[1].parse().ok()
}
