// src/tasks/sitemap.rs
// Regenerate sitemap.xml from the scanned page set. Priority and change
// frequency follow the site's editorial rules: service pages outrank
// profile pages, the shop trails everything.

use chrono::Local;

use crate::core::text::escape_xml;

/// (exact relative path, priority) — checked before the prefix rules.
const PRIORITY_EXACT: [(&str, f32); 13] = [
    ("index.html", 1.0),
    ("laboratorio/index.html", 0.9),
    ("laboratorio/stat.html", 0.9),
    ("listino-completo.html", 0.9),
    ("pages/ginecologia.html", 0.9),
    ("pages/cardiologia.html", 0.9),
    ("pages/endocrinologia.html", 0.9),
    ("pages/slim-care.html", 0.9),
    ("pages/slim-care-donna.html", 0.9),
    ("pages/pma-fertilita.html", 0.9),
    ("pages/specialita.html", 0.8),
    ("pages/contatti.html", 0.8),
    ("pages/chi-siamo.html", 0.7),
];

/// (path prefix, priority) — first match wins, most specific first.
const PRIORITY_PREFIX: [(&str, f32); 8] = [
    ("pages/visita-", 0.8),
    ("pages/ecografia-", 0.8),
    ("pages/holter-", 0.8),
    ("pages/", 0.7),
    ("laboratorio/", 0.8),
    ("equipe/", 0.6),
    ("prestazioni/", 0.6),
    ("shop/", 0.5),
];

/// (path fragment, changefreq) — first match wins.
const CHANGEFREQ_RULES: [(&str, &str); 7] = [
    ("index.html", "weekly"),
    ("laboratorio/", "weekly"),
    ("listino-completo.html", "weekly"),
    ("pages/visita-", "monthly"),
    ("pages/ecografia-", "monthly"),
    ("pages/holter-", "monthly"),
    ("equipe/", "monthly"),
];

pub fn priority(rel_path: &str) -> f32 {
    for (p, v) in PRIORITY_EXACT {
        if rel_path == p {
            return v;
        }
    }
    for (p, v) in PRIORITY_PREFIX {
        if rel_path.starts_with(p) {
            return v;
        }
    }
    0.5
}

pub fn changefreq(rel_path: &str) -> &'static str {
    for (pat, freq) in CHANGEFREQ_RULES {
        if rel_path.contains(pat) {
            return freq;
        }
    }
    "monthly"
}

/// Render the full sitemap for the given relative page paths (URL form,
/// already sorted homepage-first by the scanner).
pub fn render(base_url: &str, rel_paths: &[String]) -> String {
    let base = base_url.trim_end_matches('/');
    let today = Local::now().format("%Y-%m-%d");

    let mut xml = s!(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
    xml.push('\n');

    for rel in rel_paths {
        let loc = if rel == "index.html" {
            format!("{base}/")
        } else {
            format!("{base}/{rel}")
        };
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&loc)));
        xml.push_str(&format!("    <lastmod>{today}</lastmod>\n"));
        xml.push_str(&format!("    <changefreq>{}</changefreq>\n", changefreq(rel)));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", priority(rel)));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}
