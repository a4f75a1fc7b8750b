//! Contract fixture loader.
//!
//! Loads interactions from `contracts/http/` for contract assertion tests.

use std::path::{Path, PathBuf};

use workshop_contract::interaction::{self, Interaction};

pub struct Fixture;

impl Fixture {
    /// Workspace root: the nearest ancestor of this crate holding `contracts/`.
    pub fn workspace_root() -> PathBuf {
        let start = Path::new(env!("CARGO_MANIFEST_DIR"));
        start
            .ancestors()
            .find(|p| p.join("contracts").is_dir())
            .unwrap_or(start)
            .to_path_buf()
    }

    /// Load every interaction of `service` from `contracts/http/{service}/`.
    ///
    /// Panics if the directory is missing or any file is invalid.
    pub fn interactions(service: &str) -> Vec<Interaction> {
        let dir = Self::workspace_root().join("contracts/http").join(service);
        interaction::load_dir(&dir).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Load one interaction by id.
    pub fn interaction(service: &str, id: &str) -> Interaction {
        Self::interactions(service)
            .into_iter()
            .find(|i| i.id == id)
            .unwrap_or_else(|| panic!("no {service} interaction with id {id}"))
    }
}
