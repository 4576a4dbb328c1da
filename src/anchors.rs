//! Anchor-id derivation for in-page brand navigation.
//!
//! The guide pages render a "jump to your phone brand" index linking to one
//! section per brand. Ids are derived from display names, and duplicate
//! names within one listing get an index suffix so every anchor stays
//! unique without a lookup table. Ids are stable only within one rendering
//! pass; nothing persists them.

/// Lowercase a display name and replace each whitespace run with a hyphen.
///
/// `"Google Pixel 8"` becomes `"google-pixel-8"`.
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for ch in name.to_lowercase().chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push('-');
            }
            in_whitespace = true;
        } else {
            out.push(ch);
            in_whitespace = false;
        }
    }
    out
}

/// Derive unique anchor ids for an ordered sequence of display names.
///
/// Each id is the slugified name; when an earlier item in the same sequence
/// already produced the same base id, the later occurrence is suffixed with
/// its own zero-based index:
///
/// `["iPhone", "iPhone", "Samsung"]` → `["iphone", "iphone-1", "samsung"]`
pub fn anchor_ids<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let base = slugify(name.as_ref());
            let seen_before = names[..index]
                .iter()
                .any(|earlier| slugify(earlier.as_ref()) == base);
            if seen_before {
                format!("{}-{}", base, index)
            } else {
                base
            }
        })
        .collect()
}
