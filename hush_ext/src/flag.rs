/// Reads a boolean-like setting.
///
/// Only a case-insensitive `true` (surrounding whitespace ignored) is truthy;
/// every other present value is falsy. An absent value yields `default`.
#[must_use]
pub fn parse_flag(value: Option<&str>, default: bool) -> bool {
    value.map_or(default, |v| v.trim().eq_ignore_ascii_case("true"))
}
