/// Splits a comma-separated setting into its trimmed, non-empty entries.
pub fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|s| !s.is_empty())
}
