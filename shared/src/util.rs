/// Derive a URL-safe slug from a display name.
///
/// Lowercases, turns whitespace, `-` and `_` runs into a single `-`,
/// drops any other punctuation and trims leading/trailing `-`.
/// Non-ASCII letters and digits are kept (lowercased).
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(ch.to_lowercase());
        } else if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_dash = true;
        }
    }

    slug
}

/// Derive the short category code from a display name.
///
/// Runs of non-alphanumeric characters become a single `_`; the result is
/// trimmed of `_` and uppercased, e.g. `"Home & Garden"` -> `"HOME_GARDEN"`.
pub fn category_code(name: &str) -> String {
    let mut code = String::with_capacity(name.len());
    let mut in_gap = false;

    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if in_gap && !code.is_empty() {
                code.push('_');
            }
            in_gap = false;
            code.extend(ch.to_uppercase());
        } else {
            in_gap = true;
        }
    }

    code
}
