// src/variants.rs
// Expand each physician record into the textual name variants worth
// searching for. Variants carry a lowercase copy so page matching stays
// ASCII case-insensitive without re-lowercasing per page.

use crate::core::text::{normalize_ws, to_lower};
use crate::params::MIN_VARIANT_LEN;
use crate::registry::PhysicianRecord;

/// Honorifics seen on the site, misspellings included.
const HONORIFICS: [&str; 8] = [
    "Dott.",
    "Dott.ssa",
    "Dr.",
    "Dr",
    "Prof.",
    "Prof",
    "Dottssa",
    "Dottoressa",
];

#[derive(Debug, Clone)]
pub struct NameVariant {
    /// Search pattern as it would appear in page text.
    pub text: String,
    /// ASCII-lowercased copy of `text`.
    pub lower: String,
    /// Index of the owning record in the registry slice.
    pub owner: usize,
}

/// Build the candidate set for a whole registry, deduplicated and sorted
/// longest first so the most specific pattern always wins. Bare names
/// (no honorific) are deliberately excluded: too many false positives.
pub fn build(registry: &[PhysicianRecord]) -> Vec<NameVariant> {
    let mut out: Vec<NameVariant> = Vec::new();

    for (owner, p) in registry.iter().enumerate() {
        let name = normalize_ws(&p.name);
        let full_name = normalize_ws(&p.full_name);

        let mut texts: Vec<String> = Vec::with_capacity(HONORIFICS.len() + 1);
        texts.push(full_name);
        for h in HONORIFICS {
            texts.push(join!(h, " ", &name));
        }

        for text in texts {
            if text.chars().count() < MIN_VARIANT_LEN {
                continue;
            }
            let lower = to_lower(&text);
            if out
                .iter()
                .any(|v| v.owner == owner && v.lower == lower)
            {
                continue;
            }
            out.push(NameVariant { text, lower, owner });
        }
    }

    // Longest first; ties keep registry order (stable sort).
    out.sort_by(|a, b| b.text.len().cmp(&a.text.len()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(slug: &str, name: &str, full_name: &str, title: &str) -> PhysicianRecord {
        PhysicianRecord {
            slug: slug.into(),
            name: name.into(),
            full_name: full_name.into(),
            given_name: name.split(' ').next().unwrap_or("").into(),
            family_name: name.rsplit(' ').next().unwrap_or("").into(),
            title: title.into(),
            job_title: s!("Specialista"),
            specialty_id: s!(),
        }
    }

    #[test]
    fn every_variant_contains_family_name() {
        let regs = vec![
            rec("mario-rossi", "Mario Rossi", "Dott. Mario Rossi", "Dott."),
            rec("sara-uras", "Sara Uras", "Dott.ssa Sara Uras", "Dott.ssa"),
        ];
        let vars = build(&regs);
        assert!(!vars.is_empty());
        for v in &vars {
            let family = regs[v.owner].family();
            assert!(
                v.text.contains(family),
                "variant '{}' missing family name '{}'",
                v.text,
                family
            );
        }
    }

    #[test]
    fn feminine_honorifics_present_for_ssa_titles() {
        let regs = vec![rec("sara-uras", "Sara Uras", "Dott.ssa Sara Uras", "Dott.ssa")];
        let vars = build(&regs);
        let texts: Vec<&str> = vars.iter().map(|v| v.text.as_str()).collect();
        assert!(texts.contains(&"Dott.ssa Sara Uras"));
        assert!(texts.contains(&"Dottoressa Sara Uras"));
        assert!(texts.contains(&"Dottssa Sara Uras"));
    }

    #[test]
    fn longest_first_and_no_duplicates() {
        let regs = vec![rec("mario-rossi", "Mario Rossi", "Dott. Mario Rossi", "Dott.")];
        let vars = build(&regs);
        for w in vars.windows(2) {
            assert!(w[0].text.len() >= w[1].text.len());
        }
        // full_name equals "Dott. <name>" variant; must appear once only
        let n = vars.iter().filter(|v| v.text == "Dott. Mario Rossi").count();
        assert_eq!(n, 1);
    }

    #[test]
    fn short_variants_are_dropped() {
        // "Dr Li" (5 chars) falls under the minimum length
        let regs = vec![rec("li", "Li", "Dott. Li", "Dott.")];
        let vars = build(&regs);
        assert!(!vars.iter().any(|v| v.text == "Dr Li"));
        assert!(vars.iter().any(|v| v.text == "Dott. Li"));
    }
}
