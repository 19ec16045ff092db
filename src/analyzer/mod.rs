use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::models::{Dependency, Ecosystem};

pub mod go;
pub mod node;

/// Reads one ecosystem's manifest.
pub trait Analyzer {
    fn ecosystem(&self) -> Ecosystem;

    /// Project directory; also where `manualLicense.json` is looked up.
    fn project_dir(&self) -> &Path;

    /// Directory the dependency sources live under.
    fn dependency_root(&self) -> PathBuf;

    fn analyze(&self) -> Result<Vec<Dependency>>;
}
