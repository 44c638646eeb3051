//! Scalar normalization.

/// Trim a scalar token and strip one matching pair of outer quotes.
///
/// Quotes are removed only when the trimmed value is at least two
/// characters long and starts and ends with the same quote character
/// (`"` or `'`). Nothing else happens: no escape processing, no doubled
/// quote collapsing (`'it''s'` becomes `it''s`), no type coercion.
pub fn normalize_scalar(raw: &str) -> &str {
    let value = raw.trim();
    for quote in ['"', '\''] {
        if value.len() >= 2
            && let Some(inner) = value
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
