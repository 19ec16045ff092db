use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;

use crate::error::CollectError;
use crate::models::{Dependency, Ecosystem};

/// Analyzer for npm projects.
///
/// Only the direct `dependencies` of `package.json` are collected;
/// `devDependencies` are not shipped and carry no license obligation.
pub struct NodeAnalyzer {
    project: PathBuf,
    node_modules: Option<PathBuf>,
}

impl NodeAnalyzer {
    pub fn new(project: impl Into<PathBuf>) -> Self {
        Self {
            project: project.into(),
            node_modules: None,
        }
    }

    /// Use `dir` instead of `<project>/node_modules` as the dependency root.
    pub fn with_node_modules(mut self, dir: Option<PathBuf>) -> Self {
        self.node_modules = dir;
        self
    }
}

impl super::Analyzer for NodeAnalyzer {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Npm
    }

    fn project_dir(&self) -> &Path {
        &self.project
    }

    fn dependency_root(&self) -> PathBuf {
        self.node_modules
            .clone()
            .unwrap_or_else(|| self.project.join("node_modules"))
    }

    fn analyze(&self) -> Result<Vec<Dependency>> {
        let pkg = self.project.join("package.json");
        if !pkg.is_file() {
            return Err(CollectError::ManifestNotFound {
                ecosystem: Ecosystem::Npm,
                path: pkg,
            }
            .into());
        }
        parse_package_json(&pkg)
    }
}

/// Parse `package.json` and return the keys of its `dependencies` object.
fn parse_package_json(path: &Path) -> Result<Vec<Dependency>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    let deps = json
        .get("dependencies")
        .and_then(|v| v.as_object())
        .map(|pkgs| {
            pkgs.keys()
                .map(|name| Dependency::new(name.clone(), Ecosystem::Npm))
                .collect()
        })
        .unwrap_or_default();

    Ok(deps)
}
