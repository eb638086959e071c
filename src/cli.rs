// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::params::{Params, TaskKind};
use crate::progress::Progress;
use crate::{registry, runner};

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    if params.list_physicians {
        for p in registry::load(&params.registry_path())? {
            println!("{},{}", p.slug, p.name);
        }
        return Ok(());
    }

    let mut progress = CliProgress {
        dry_run: params.dry_run,
    };
    let summary = runner::run(&params, Some(&mut progress))?;

    match params.task {
        TaskKind::Link => {
            println!(
                "{} page(s) {}, {} link(s), {} error(s)",
                summary.pages_modified,
                if params.dry_run { "would change" } else { "modified" },
                summary.links_added,
                summary.errors
            );
        }
        TaskKind::Sitemap => {
            for f in &summary.files_written {
                println!("Wrote {} ({} urls)", f.display(), summary.pages_seen);
            }
        }
    }

    if summary.errors > 0 {
        return Err(format!("{} page(s) failed", summary.errors).into());
    }
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--task" => {
                let v = args.next().ok_or("Missing value for --task")?;
                params.task = match v.to_ascii_lowercase().as_str() {
                    "link" => TaskKind::Link,
                    "sitemap" => TaskKind::Sitemap,
                    other => return Err(format!("Unknown task: {}", other).into()),
                };
            }
            "-s" | "--site" => {
                let v = args.next().ok_or("Missing value for --site")?;
                params.site_root = crate::file::normalize_dir_path(&v);
            }
            "-r" | "--registry" => {
                params.registry =
                    Some(PathBuf::from(args.next().ok_or("Missing registry path")?));
            }
            "--base-url" => {
                params.base_url = args.next().ok_or("Missing value for --base-url")?;
            }
            "-o" | "--out" => {
                params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "-n" | "--dry-run" => params.dry_run = true,
            "--list-physicians" => params.list_physicians = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}

/// Per-page console output, one line per event.
struct CliProgress {
    dry_run: bool,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        println!("Processing {} page(s)...", total);
    }

    fn log(&mut self, msg: &str) {
        println!("  {}", msg);
    }

    fn page_done(&mut self, page: &str, links: usize) {
        if links > 0 {
            let verb = if self.dry_run { "would add" } else { "added" };
            println!("  {} - {} {} link(s)", page, verb, links);
        }
    }

    fn page_failed(&mut self, page: &str, err: &str) {
        eprintln!("  {} - FAILED: {}", page, err);
    }
}
