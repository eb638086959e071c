// src/core/tokenizer.rs
// Single-pass streaming HTML tokenizer. Deliberately forgiving: real pages
// on the site are hand-edited and occasionally broken, so anything that does
// not parse as markup is surfaced as a warning and carried through verbatim
// rather than dropped. Concatenating the raw slices of all tokens always
// reproduces the input byte-for-byte.

use super::text::to_lower;

/// Elements whose character data is opaque (never linkable, never markup).
const RAW_ELEMENTS: [&str; 3] = ["script", "style", "title"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// Character data between tags. The only context eligible for rewriting.
    Text(&'a str),
    /// `<name attr=...>` including the angle brackets.
    OpenTag {
        name: String,
        raw: &'a str,
        self_closing: bool,
    },
    /// `</name>` including the angle brackets.
    CloseTag { name: String, raw: &'a str },
    /// Contents of a script/style/title element, excluding its tags.
    RawText { element: &'static str, raw: &'a str },
    /// `<!-- ... -->`
    Comment(&'a str),
    /// `<!DOCTYPE ...>` and other `<!`/`<?` declarations.
    Decl(&'a str),
}

impl<'a> Token<'a> {
    /// The exact input slice this token covers.
    pub fn raw(&self) -> &'a str {
        match self {
            Token::Text(r)
            | Token::Comment(r)
            | Token::Decl(r)
            | Token::OpenTag { raw: r, .. }
            | Token::CloseTag { raw: r, .. }
            | Token::RawText { raw: r, .. } => r,
        }
    }
}

pub struct Document<'a> {
    pub tokens: Vec<Token<'a>>,
    /// Structural problems found while scanning (unclosed <a>, stray </a>,
    /// unterminated script/comment). Best-effort processing continues.
    pub warnings: Vec<String>,
}

impl Document<'_> {
    pub fn is_balanced(&self) -> bool {
        self.warnings.is_empty()
    }
}

pub fn tokenize(input: &str) -> Document<'_> {
    let lower = to_lower(input);
    let mut tokens: Vec<Token<'_>> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();
    let mut anchor_depth: usize = 0;
    let mut pos = 0;
    let len = input.len();

    while pos < len {
        if !is_tag_start(input, pos) {
            let end = next_tag_start(input, pos + 1);
            tokens.push(Token::Text(&input[pos..end]));
            pos = end;
            continue;
        }

        let rest = &input[pos..];

        if rest.starts_with("<!--") {
            match rest[4..].find("-->") {
                Some(i) => {
                    let end = pos + 4 + i + 3;
                    tokens.push(Token::Comment(&input[pos..end]));
                    pos = end;
                }
                None => {
                    warnings.push(s!("unterminated comment"));
                    tokens.push(Token::Comment(rest));
                    pos = len;
                }
            }
            continue;
        }

        if rest.starts_with("<!") || rest.starts_with("<?") {
            match rest.find('>') {
                Some(i) => {
                    tokens.push(Token::Decl(&input[pos..pos + i + 1]));
                    pos += i + 1;
                }
                None => {
                    warnings.push(s!("unterminated declaration"));
                    tokens.push(Token::Decl(rest));
                    pos = len;
                }
            }
            continue;
        }

        if rest.starts_with("</") {
            match rest.find('>') {
                Some(i) => {
                    let raw = &input[pos..pos + i + 1];
                    let name = tag_name(&raw[2..]);
                    if name == "a" {
                        if anchor_depth == 0 {
                            warnings.push(s!("</a> without matching <a>"));
                        } else {
                            anchor_depth -= 1;
                        }
                    }
                    tokens.push(Token::CloseTag { name, raw });
                    pos += i + 1;
                }
                None => {
                    warnings.push(s!("stray '</' at end of document"));
                    tokens.push(Token::Text(rest));
                    pos = len;
                }
            }
            continue;
        }

        // Open tag. '>' inside quoted attribute values does not terminate it.
        match find_tag_end(input, pos) {
            Some(end) => {
                let raw = &input[pos..end];
                let name = tag_name(&raw[1..]);
                let self_closing = raw[..raw.len() - 1].trim_end().ends_with('/');

                if name == "a" && !self_closing {
                    anchor_depth += 1;
                }

                let raw_element = RAW_ELEMENTS.iter().find(|e| name.as_str() == **e).copied();
                tokens.push(Token::OpenTag {
                    name,
                    raw,
                    self_closing,
                });
                pos = end;

                if let Some(element) = raw_element {
                    if !self_closing {
                        let close_pat = join!("</", element);
                        match lower[pos..].find(&close_pat) {
                            Some(i) => {
                                if i > 0 {
                                    tokens.push(Token::RawText {
                                        element,
                                        raw: &input[pos..pos + i],
                                    });
                                }
                                pos += i; // close tag tokenized on next iteration
                            }
                            None => {
                                warnings.push(format!("unterminated <{element}> block"));
                                tokens.push(Token::RawText {
                                    element,
                                    raw: &input[pos..],
                                });
                                pos = len;
                            }
                        }
                    }
                }
            }
            None => {
                warnings.push(s!("unterminated tag at end of document"));
                // Not linkable: carry the tail through as a declaration.
                tokens.push(Token::Decl(rest));
                pos = len;
            }
        }
    }

    if anchor_depth > 0 {
        warnings.push(format!("{anchor_depth} unclosed <a> tag(s)"));
    }

    Document { tokens, warnings }
}

/// Extract an attribute value from a raw open-tag slice.
/// Handles `attr="v"`, `attr='v'` and unquoted `attr=v`.
pub fn attr_value<'a>(raw_tag: &'a str, attr: &str) -> Option<&'a str> {
    let lower = to_lower(raw_tag);
    let needle = join!(to_lower(attr), "=");
    let mut from = 0;

    while let Some(i) = lower[from..].find(&needle) {
        let at = from + i;
        let prev = lower.as_bytes()[at.saturating_sub(1)];
        let vstart = at + needle.len();
        // Attribute name must start after a delimiter, not mid-word
        // (keeps `href=` from matching `data-href=`).
        if prev.is_ascii_alphanumeric() || prev == b'-' || prev == b'_' {
            from = vstart;
            continue;
        }
        let rest = &raw_tag[vstart..];
        let value = match rest.chars().next() {
            Some(q @ ('"' | '\'')) => {
                let body = &rest[1..];
                match body.find(q) {
                    Some(e) => &body[..e],
                    None => body.trim_end_matches('>'),
                }
            }
            _ => {
                let e = rest
                    .find(|c: char| c.is_whitespace() || c == '>' || c == '/')
                    .unwrap_or(rest.len());
                &rest[..e]
            }
        };
        return Some(value);
    }
    None
}

/* ---------- internals ---------- */

fn is_tag_start(s: &str, at: usize) -> bool {
    let b = s.as_bytes();
    if b[at] != b'<' {
        return false;
    }
    match b.get(at + 1) {
        Some(c) => c.is_ascii_alphabetic() || *c == b'/' || *c == b'!' || *c == b'?',
        None => false,
    }
}

fn next_tag_start(s: &str, from: usize) -> usize {
    let b = s.as_bytes();
    let mut i = from;
    while i < b.len() {
        if b[i] == b'<' && is_tag_start(s, i) {
            return i;
        }
        i += 1;
    }
    b.len()
}

/// Byte offset one past the '>' closing the tag starting at `from`,
/// skipping '>' inside quoted attribute values.
fn find_tag_end(s: &str, from: usize) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (i, ch) in s[from..].char_indices() {
        match quote {
            Some(q) => {
                if ch == q {
                    quote = None;
                }
            }
            None => match ch {
                '"' | '\'' => quote = Some(ch),
                '>' => return Some(from + i + 1),
                _ => {}
            },
        }
    }
    None
}

/// Lowercased tag name: leading alphanumeric/'-' run of `s`.
fn tag_name(s: &str) -> String {
    s.chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reassemble(doc: &Document) -> String {
        doc.tokens.iter().map(|t| t.raw()).collect()
    }

    #[test]
    fn lossless_on_well_formed_page() {
        let html = r#"<!DOCTYPE html>
<html><head><title>Dott. Mario Rossi</title>
<script type="application/ld+json">{"name": "Mario Rossi"}</script>
</head><body><!-- team --><p class="x">Dott. Mario Rossi riceve</p></body></html>"#;
        let doc = tokenize(html);
        assert_eq!(reassemble(&doc), html);
        assert!(doc.is_balanced(), "{:?}", doc.warnings);
    }

    #[test]
    fn title_and_script_content_is_raw_text() {
        let html = "<title>Dott. Mario Rossi</title><script>var x = '<p>';</script>";
        let doc = tokenize(html);
        let raws: Vec<_> = doc
            .tokens
            .iter()
            .filter_map(|t| match t {
                Token::RawText { element, raw } => Some((*element, *raw)),
                _ => None,
            })
            .collect();
        assert_eq!(
            raws,
            vec![("title", "Dott. Mario Rossi"), ("script", "var x = '<p>';")]
        );
        // nothing from inside those elements leaks out as Text
        assert!(!doc.tokens.iter().any(|t| matches!(t, Token::Text(_))));
    }

    #[test]
    fn gt_inside_quoted_attribute() {
        let html = r#"<a href="x.html" title="a > b">go</a>"#;
        let doc = tokenize(html);
        assert!(matches!(&doc.tokens[0], Token::OpenTag { name, .. } if name == "a"));
        assert!(matches!(&doc.tokens[1], Token::Text(t) if *t == "go"));
        assert!(doc.is_balanced());
    }

    #[test]
    fn unbalanced_anchor_warns_but_tokenizes() {
        let doc = tokenize("<p><a href=\"x\">text</p>");
        assert!(!doc.is_balanced());
        assert!(doc.warnings.iter().any(|w| w.contains("unclosed <a>")));
        assert_eq!(reassemble(&doc), "<p><a href=\"x\">text</p>");

        let doc2 = tokenize("text</a> more");
        assert!(doc2.warnings.iter().any(|w| w.contains("without matching")));
    }

    #[test]
    fn stray_lt_stays_in_text() {
        let html = "<p>5 < 7 e 9 > 3</p>";
        let doc = tokenize(html);
        assert_eq!(reassemble(&doc), html);
        assert!(
            doc.tokens
                .iter()
                .any(|t| matches!(t, Token::Text(s) if s.contains("5 < 7")))
        );
    }

    #[test]
    fn attr_value_variants() {
        assert_eq!(
            attr_value(r#"<a href="equipe/x.html" class=physician-link>"#, "href"),
            Some("equipe/x.html")
        );
        assert_eq!(
            attr_value(r#"<a href="equipe/x.html" class=physician-link>"#, "class"),
            Some("physician-link")
        );
        assert_eq!(attr_value("<a href='y.html'>", "href"), Some("y.html"));
        assert_eq!(attr_value("<a data-href=\"z\">", "href"), None);
        assert_eq!(attr_value("<p>", "href"), None);
    }

    #[test]
    fn unterminated_script_consumes_to_eof_with_warning() {
        let doc = tokenize("<script>alert('Dott. Mario Rossi')");
        assert!(!doc.is_balanced());
        assert!(
            doc.tokens
                .iter()
                .any(|t| matches!(t, Token::RawText { element: "script", .. }))
        );
    }
}
