// src/file.rs

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

/// Parent-directory chain needed to climb from a page at `depth`
/// directories below the site root back up to the root.
/// Pure function: depth 0 → "", depth 2 → "../../".
pub fn rel_prefix(depth: usize) -> String {
    "../".repeat(depth)
}

/// How many directories separate `page` from `site_root`.
/// `pages/visita.html` → 1, `index.html` → 0.
pub fn page_depth(site_root: &Path, page: &Path) -> usize {
    let rel = page.strip_prefix(site_root).unwrap_or(page);
    rel.components().count().saturating_sub(1)
}

/// Path of `page` relative to the site root, with forward slashes
/// (URL form, used by the sitemap and progress output).
pub fn rel_url_path(site_root: &Path, page: &Path) -> String {
    let rel = page.strip_prefix(site_root).unwrap_or(page);
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    parts.join("/")
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

pub fn normalize_dir_path(p: &str) -> PathBuf {
    let sep = std::path::MAIN_SEPARATOR;
    PathBuf::from(
        p.chars()
            .map(|c| if c == '/' || c == '\\' { sep } else { c })
            .collect::<String>(),
    )
}
