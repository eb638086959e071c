// src/registry.rs
// Physician registry: the JSON database the site is generated from.
// Loaded once per run; any defect here is fatal (no patterns → nothing to do).

use std::collections::HashSet;
use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct PhysicianRecord {
    /// URL- and filename-safe id; profile page is `equipe/<slug>.html`.
    pub slug: String,
    /// Plain name, e.g. "Sara Uras".
    pub name: String,
    /// Name as displayed, honorific included, e.g. "Dott.ssa Sara Uras".
    pub full_name: String,
    #[serde(default)]
    pub given_name: String,
    #[serde(default)]
    pub family_name: String,
    /// Honorific, e.g. "Dott." / "Dott.ssa" / "Prof."
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_job_title")]
    pub job_title: String,
    #[serde(default)]
    pub specialty_id: String,
}

fn default_title() -> String {
    s!("Dott.")
}

fn default_job_title() -> String {
    s!("Specialista")
}

#[derive(Debug, Deserialize)]
struct RegistryFile {
    physicians: Vec<PhysicianRecord>,
}

impl PhysicianRecord {
    /// Family name as stored, or the last word of `name` when the field is absent.
    pub fn family(&self) -> &str {
        if !self.family_name.is_empty() {
            return &self.family_name;
        }
        self.name.rsplit(' ').next().unwrap_or(&self.name)
    }
}

/// Load and validate the registry. Fatal on missing file, bad JSON,
/// empty slug/name, or duplicate slugs.
pub fn load(path: &Path) -> Result<Vec<PhysicianRecord>, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read registry {}: {}", path.display(), e))?;
    let parsed: RegistryFile = serde_json::from_str(&text)
        .map_err(|e| format!("malformed registry {}: {}", path.display(), e))?;

    let mut seen: HashSet<&str> = HashSet::new();
    for p in &parsed.physicians {
        if p.slug.trim().is_empty() {
            return Err(format!("registry entry '{}' has an empty slug", p.name).into());
        }
        if p.name.trim().is_empty() {
            return Err(format!("registry entry '{}' has an empty name", p.slug).into());
        }
        if !seen.insert(p.slug.as_str()) {
            return Err(format!("duplicate slug in registry: {}", p.slug).into());
        }
    }

    Ok(parsed.physicians)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_tmp(name: &str, contents: &str) -> std::path::PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("medlink_registry_{}", name));
        let mut f = fs::File::create(&p).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        p
    }

    #[test]
    fn loads_minimal_registry() {
        let p = write_tmp(
            "min.json",
            r#"{"physicians":[{"slug":"mario-rossi","name":"Mario Rossi","full_name":"Dott. Mario Rossi"}]}"#,
        );
        let regs = load(&p).unwrap();
        assert_eq!(regs.len(), 1);
        assert_eq!(regs[0].title, "Dott.");
        assert_eq!(regs[0].family(), "Rossi");
    }

    #[test]
    fn duplicate_slug_is_fatal() {
        let p = write_tmp(
            "dup.json",
            r#"{"physicians":[
                {"slug":"x","name":"A B","full_name":"Dott. A B"},
                {"slug":"x","name":"C D","full_name":"Dott. C D"}
            ]}"#,
        );
        assert!(load(&p).is_err());
    }

    #[test]
    fn missing_file_is_fatal() {
        assert!(load(Path::new("/nonexistent/physicians.json")).is_err());
    }
}
