// src/core/text.rs

/// Fast ASCII-only lowercasing. Non-ASCII chars pass through unchanged,
/// so the output has the same byte layout as the input and byte offsets
/// found in one are valid in the other.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Collapse whitespace runs into single spaces and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// Word-boundary check for a byte range within `text`: the characters
/// adjacent to the range must not be alphanumeric. Keeps "Dott. Mario Rossi"
/// from matching inside "Dott. Mario Rossini".
pub fn word_bounded(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start]
        .chars()
        .next_back()
        .map_or(true, |c| !c.is_alphanumeric());
    let after_ok = text[end..]
        .chars()
        .next()
        .map_or(true, |c| !c.is_alphanumeric());
    before_ok && after_ok
}

/// Minimal escaping for text placed inside a double-quoted HTML attribute.
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escaping for XML text nodes (sitemap `<loc>` values).
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercasing_preserves_byte_layout() {
        let s = "Dott.ssa Chiara Bilò";
        assert_eq!(to_lower(s).len(), s.len());
        assert_eq!(to_lower(s), "dott.ssa chiara bilò");
    }

    #[test]
    fn word_boundaries() {
        let t = "Dott. Mario Rossini riceve";
        // "Mario Rossi" inside "Mario Rossini" is not bounded
        let start = t.find("Mario Rossi").unwrap();
        assert!(!word_bounded(t, start, start + "Mario Rossi".len()));
        // the full "Mario Rossini" is
        assert!(word_bounded(t, start, start + "Mario Rossini".len()));
    }

    #[test]
    fn ws_normalization() {
        assert_eq!(normalize_ws("  Sara \t Uras \n"), "Sara Uras");
    }
}
