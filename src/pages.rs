// src/pages.rs
// Enumerate the HTML pages of the site tree. Generated/asset directories
// and a handful of boilerplate pages are never touched.

use std::error::Error;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::params::TaskKind;

/// Directories that never contain linkable pages.
const EXCLUDE_DIRS: [&str; 14] = [
    "node_modules",
    "backups",
    "templates",
    "components",
    "data",
    "build",
    "output",
    "scripts",
    "docs",
    "reports",
    "logs",
    "css",
    "js",
    "images",
];

/// Pages excluded regardless of task.
const EXCLUDE_FILES: [&str; 3] = ["404.html", "error.html", "test.html"];

/// Boilerplate pages the autolinker additionally skips. The sitemap still
/// lists them: they are reachable pages, just not worth linking into.
const EXCLUDE_LINK_FILES: [&str; 2] = ["privacy.html", "cookie.html"];

fn is_excluded_dir(name: &str) -> bool {
    name.starts_with('.') || EXCLUDE_DIRS.contains(&name)
}

/// All processable `.html` files under `site_root` for the given task,
/// sorted, with the root `index.html` first (the sitemap wants the
/// homepage on top).
pub fn scan(site_root: &Path, task: TaskKind) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    if !site_root.is_dir() {
        return Err(format!("site root is not a directory: {}", site_root.display()).into());
    }

    let mut pages: Vec<PathBuf> = Vec::new();
    let walker = WalkDir::new(site_root).into_iter().filter_entry(|e| {
        if e.depth() == 0 || !e.file_type().is_dir() {
            return true;
        }
        let name = e.file_name().to_string_lossy();
        !is_excluded_dir(&name)
    });

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if !name.ends_with(".html") {
            continue;
        }
        if EXCLUDE_FILES.contains(&name.as_ref()) {
            continue;
        }
        if task == TaskKind::Link && EXCLUDE_LINK_FILES.contains(&name.as_ref()) {
            continue;
        }
        pages.push(entry.into_path());
    }

    let homepage = site_root.join("index.html");
    pages.sort_by(|a, b| {
        let ka = *a != homepage;
        let kb = *b != homepage;
        ka.cmp(&kb).then_with(|| a.cmp(b))
    });

    Ok(pages)
}
