// src/tasks/link.rs
// Physician auto-linker: one forward pass over the token stream, building a
// fresh output buffer. Links are only ever inserted into text tokens outside
// any <a>, so tags, attributes, scripts, styles, titles and JSON-LD blocks
// are structurally unreachable — no context-window guessing.

use std::collections::HashSet;

use crate::core::text::{escape_attr, to_lower, word_bounded};
use crate::core::tokenizer::{self, Token, attr_value};
use crate::file::rel_prefix;
use crate::params::PROFILE_DIR;
use crate::registry::PhysicianRecord;
use crate::variants::NameVariant;

pub struct PageOutcome {
    /// Rewritten page text, or None when nothing changed.
    pub output: Option<String>,
    pub links_added: usize,
    /// Tokenizer structure warnings (page still processed best-effort).
    pub warnings: Vec<String>,
}

/// Link physician names on one page.
/// `page_rel` is the page's path relative to the site root in URL form
/// (used to suppress self-links on profile pages); `depth` its directory
/// depth below the root.
pub fn autolink_page(
    content: &str,
    page_rel: &str,
    depth: usize,
    registry: &[PhysicianRecord],
    variants: &[NameVariant],
) -> PageOutcome {
    let doc = tokenizer::tokenize(content);
    let prefix = rel_prefix(depth);

    // One profile link per physician per page: seed the done-set with
    // physicians the page already links to, plus the page's own profile.
    let mut linked = existing_profile_links(&doc.tokens, registry);
    for (i, p) in registry.iter().enumerate() {
        if page_rel == format!("{}/{}.html", PROFILE_DIR, p.slug) {
            linked.insert(i);
        }
    }

    let mut out = String::with_capacity(content.len() + 256);
    let mut links_added = 0usize;
    let mut anchor_depth = 0usize;

    for token in &doc.tokens {
        match token {
            Token::Text(text) if anchor_depth == 0 => {
                links_added += link_text(text, registry, variants, &prefix, &mut linked, &mut out);
            }
            Token::OpenTag {
                name, self_closing, ..
            } => {
                out.push_str(token.raw());
                if name == "a" && !self_closing {
                    anchor_depth += 1;
                }
            }
            Token::CloseTag { name, .. } => {
                out.push_str(token.raw());
                if name == "a" {
                    anchor_depth = anchor_depth.saturating_sub(1);
                }
            }
            _ => out.push_str(token.raw()),
        }
    }

    PageOutcome {
        output: if links_added > 0 { Some(out) } else { None },
        links_added,
        warnings: doc.warnings,
    }
}

/// Physicians whose profile page the document already links to, via any
/// anchor href ending in `<slug>.html` (path-segment exact).
fn existing_profile_links(tokens: &[Token], registry: &[PhysicianRecord]) -> HashSet<usize> {
    let mut linked = HashSet::new();
    for token in tokens {
        if let Token::OpenTag { name, raw, .. } = token {
            if name != "a" {
                continue;
            }
            if let Some(href) = attr_value(raw, "href") {
                for (i, p) in registry.iter().enumerate() {
                    if href_targets_slug(href, &p.slug) {
                        linked.insert(i);
                    }
                }
            }
        }
    }
    linked
}

fn href_targets_slug(href: &str, slug: &str) -> bool {
    let path = href.split(['?', '#']).next().unwrap_or(href);
    let tail = join!(slug, ".html");
    match path.strip_suffix(tail.as_str()) {
        // "mario-rossi.html" must not count as a link to "rossi"
        Some(rest) => rest.is_empty() || rest.ends_with('/'),
        None => false,
    }
}

/// Rewrite a single text node. Candidate variants come in longest-first;
/// each still-unlinked physician may claim one word-bounded, non-overlapping
/// match. Returns the number of anchors inserted.
fn link_text(
    text: &str,
    registry: &[PhysicianRecord],
    variants: &[NameVariant],
    prefix: &str,
    linked: &mut HashSet<usize>,
    out: &mut String,
) -> usize {
    let lower = to_lower(text);
    let mut claims: Vec<(usize, usize, usize)> = Vec::new(); // (start, end, owner)

    for v in variants {
        if linked.contains(&v.owner) {
            continue;
        }
        let mut from = 0;
        while let Some(i) = lower[from..].find(&v.lower) {
            let start = from + i;
            let end = start + v.lower.len();
            let overlaps = claims.iter().any(|&(cs, ce, _)| start < ce && end > cs);
            if word_bounded(text, start, end) && !overlaps {
                claims.push((start, end, v.owner));
                linked.insert(v.owner);
                break;
            }
            from = end;
        }
    }

    if claims.is_empty() {
        out.push_str(text);
        return 0;
    }

    claims.sort_by_key(|&(start, _, _)| start);
    let mut cursor = 0;
    for &(start, end, owner) in &claims {
        out.push_str(&text[cursor..start]);
        out.push_str(&profile_anchor(&registry[owner], &text[start..end], prefix));
        cursor = end;
    }
    out.push_str(&text[cursor..]);
    claims.len()
}

fn profile_anchor(rec: &PhysicianRecord, matched: &str, prefix: &str) -> String {
    let title = escape_attr(&format!(
        "Vedi profilo e prenota - {} - {}",
        rec.full_name, rec.job_title
    ));
    format!(
        r#"<a href="{prefix}{dir}/{slug}.html" class="physician-link" title="{title}">{matched}</a>"#,
        dir = PROFILE_DIR,
        slug = rec.slug,
    )
}
