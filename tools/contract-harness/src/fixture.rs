//! Contract fixture discovery.
//!
//! Interactions live at `contracts/http/{service}/{id}.json`; see
//! `workshop_contract::interaction` for the format.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use workshop_contract::interaction::{self, Interaction};

/// Walk up from this crate's manifest dir to the directory holding
/// `contracts/`.
pub fn workspace_root() -> PathBuf {
    let start = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    start
        .ancestors()
        .find(|p| p.join("contracts").is_dir())
        .unwrap_or(&start)
        .to_path_buf()
}

/// Load all interactions from `{workspace_root}/contracts/http/`, optionally
/// filtered to a single service subdirectory.
pub fn load_all(workspace_root: &Path, service: Option<&str>) -> Result<Vec<Interaction>> {
    let http_dir = workspace_root.join("contracts/http");

    let service_dirs: Vec<_> = match service {
        Some(svc) => vec![http_dir.join(svc)],
        None => fs::read_dir(&http_dir)
            .with_context(|| format!("cannot open {}", http_dir.display()))?
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
            .map(|e| e.path())
            .collect(),
    };

    let mut interactions = Vec::new();
    for dir in service_dirs {
        if !dir.exists() {
            continue;
        }
        interactions.extend(interaction::load_dir(&dir)?);
    }

    interactions.sort_by(|a, b| a.service.cmp(&b.service).then(a.id.cmp(&b.id)));
    Ok(interactions)
}
