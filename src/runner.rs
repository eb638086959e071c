// src/runner.rs
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use crate::{
    file::{page_depth, rel_url_path},
    pages,
    params::{DEFAULT_SITEMAP_FILENAME, Params, TaskKind},
    progress::Progress,
    registry, tasks, variants,
};

/// Summary of what a run produced.
pub struct RunSummary {
    pub pages_seen: usize,
    pub pages_modified: usize,
    pub links_added: usize,
    /// Per-page failures (run continues past them).
    pub errors: usize,
    pub files_written: Vec<PathBuf>,
}

impl RunSummary {
    fn new() -> Self {
        Self {
            pages_seen: 0,
            pages_modified: 0,
            links_added: 0,
            errors: 0,
            files_written: Vec::new(),
        }
    }
}

/// Top-level runner: dispatch on task kind and run.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    params: &Params,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    crate::log::set_site_root(&params.site_root);
    match params.task {
        TaskKind::Link => run_link(params, progress),
        TaskKind::Sitemap => run_sitemap(params, progress),
    }
}

/* ---------------- Link implementation ---------------- */

fn run_link(
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    // Registry problems are fatal: without patterns there is nothing to do.
    let registry = registry::load(&params.registry_path())?;
    let variants = variants::build(&registry);
    crate::logf!(
        "link: {} physicians, {} variants, site {}",
        registry.len(),
        variants.len(),
        params.site_root.display()
    );

    let page_list = pages::scan(&params.site_root, params.task)?;
    if let Some(p) = progress.as_deref_mut() {
        p.begin(page_list.len());
    }

    let mut summary = RunSummary::new();
    summary.pages_seen = page_list.len();

    for page in &page_list {
        let rel = rel_url_path(&params.site_root, page);
        let depth = page_depth(&params.site_root, page);

        let content = match fs::read_to_string(page) {
            Ok(c) => c,
            Err(e) => {
                crate::loge!("read {}: {}", rel, e);
                if let Some(p) = progress.as_deref_mut() {
                    p.page_failed(&rel, &e.to_string());
                }
                summary.errors += 1;
                continue;
            }
        };

        let outcome = tasks::link::autolink_page(&content, &rel, depth, &registry, &variants);
        for w in &outcome.warnings {
            crate::logw!("{}: {}", rel, w);
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("warning: {rel}: {w}"));
            }
        }

        match outcome.output {
            Some(new_content) if !params.dry_run => {
                if let Err(e) = fs::write(page, &new_content) {
                    crate::loge!("write {}: {}", rel, e);
                    if let Some(p) = progress.as_deref_mut() {
                        p.page_failed(&rel, &e.to_string());
                    }
                    summary.errors += 1;
                    continue;
                }
                summary.pages_modified += 1;
                summary.links_added += outcome.links_added;
                summary.files_written.push(page.clone());
            }
            Some(_) => {
                // dry run: count, write nothing
                summary.pages_modified += 1;
                summary.links_added += outcome.links_added;
            }
            None => {}
        }

        if let Some(p) = progress.as_deref_mut() {
            p.page_done(&rel, outcome.links_added);
        }
    }

    crate::logf!(
        "link done: {} links on {} pages, {} errors",
        summary.links_added,
        summary.pages_modified,
        summary.errors
    );
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(summary)
}

/* ---------------- Sitemap implementation ---------------- */

fn run_sitemap(
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let page_list = pages::scan(&params.site_root, params.task)?;
    let rels: Vec<String> = page_list
        .iter()
        .map(|p| rel_url_path(&params.site_root, p))
        .collect();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(rels.len());
    }

    let xml = tasks::sitemap::render(&params.base_url, &rels);
    let out_path = params
        .out
        .clone()
        .unwrap_or_else(|| params.site_root.join(DEFAULT_SITEMAP_FILENAME));

    let mut summary = RunSummary::new();
    summary.pages_seen = rels.len();

    if params.dry_run {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!(
                "dry run: would write {} urls to {}",
                rels.len(),
                out_path.display()
            ));
        }
    } else {
        if let Some(parent) = out_path.parent() {
            if !parent.as_os_str().is_empty() {
                crate::file::ensure_directory(parent)?;
            }
        }
        fs::write(&out_path, &xml)?;
        summary.files_written.push(out_path.clone());
        crate::logf!("sitemap: {} urls -> {}", rels.len(), out_path.display());
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(summary)
}
