//! Phone list <-> comma separated string used by the edit forms.

/// Split a comma separated phone list into trimmed parts.
///
/// `None` and `""` give an empty list. Empty parts in a non-empty input are
/// kept, so `"123,"` yields `["123", ""]`.
pub fn split_phones_csv(phones_csv: Option<&str>) -> Vec<String> {
    match phones_csv {
        Some(csv) if !csv.is_empty() => csv.split(',').map(|p| p.trim().to_string()).collect(),
        _ => Vec::new(),
    }
}

/// Join phones back with a bare comma, skipping blank numbers
pub fn join_phones<S: AsRef<str>>(phones: &[S]) -> String {
    phones
        .iter()
        .map(|p| p.as_ref().trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}
