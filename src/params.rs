// src/params.rs
use std::path::PathBuf;

pub const DEFAULT_REGISTRY: &str = "data/entities/physicians.json";
pub const PROFILE_DIR: &str = "equipe";
pub const DEFAULT_SITEMAP_FILENAME: &str = "sitemap.xml";
pub const DEFAULT_BASE_URL: &str = "https://bio-clinic.it";

/// Name variants shorter than this are too generic to link safely.
pub const MIN_VARIANT_LEN: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskKind {
    Link,
    Sitemap,
}

#[derive(Clone)]
pub struct Params {
    pub task: TaskKind,               // link, sitemap
    pub site_root: PathBuf,           // root of the static site tree
    pub registry: Option<PathBuf>,    // physicians JSON (default: <site>/data/entities/physicians.json)
    pub out: Option<PathBuf>,         // sitemap output override
    pub base_url: String,             // sitemap URL prefix
    pub dry_run: bool,                // report, write nothing
    pub list_physicians: bool,        // list registry entries then exit
}

impl Params {
    pub fn new() -> Self {
        Self {
            task: TaskKind::Link,
            site_root: PathBuf::from("."),
            registry: None,
            out: None,
            base_url: s!(DEFAULT_BASE_URL),
            dry_run: false,
            list_physicians: false,
        }
    }

    /// Registry path: explicit override, or the conventional location under the site root.
    pub fn registry_path(&self) -> PathBuf {
        match &self.registry {
            Some(p) => p.clone(),
            None => self.site_root.join(DEFAULT_REGISTRY),
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
