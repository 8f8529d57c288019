//! Identifier text transforms used for matching and thumbnail naming.
//!
//! Both functions are pure and total: absent identifiers are represented as
//! the empty string and map to the empty string, never an error.

/// Matching key for a report number: ASCII upper-case, alphanumerics only.
///
/// Applied identically to needed-list entries and catalog records; the join
/// is exact membership on this key. `"pnw 615"`, `"PNW-615"` and `"PNW615"`
/// all produce `"PNW615"`.
pub fn normalize_key(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Thumbnail filename for a report number: lower-case, every run of
/// whitespace replaced by a single underscore, `.png` appended.
///
/// `"PNW 615"` → `"pnw_615.png"`; the empty string maps to itself.
pub fn thumbnail_filename(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let mut name = String::with_capacity(raw.len() + 4);
    let mut in_whitespace = false;
    for c in raw.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                name.push('_');
                in_whitespace = true;
            }
        } else {
            name.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }
    name.push_str(".png");
    name
}
