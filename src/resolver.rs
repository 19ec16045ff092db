use std::path::{Path, PathBuf};

use crate::config::OverrideTable;
use crate::detector::LicenseDetector;
use crate::models::{Dependency, LicenseSource, Resolution};

/// Resolves dependencies of one ecosystem: manual overrides first, then
/// license files under the dependency root.
pub struct Resolver<'a> {
    overrides: &'a OverrideTable,
    detector: &'a LicenseDetector,
    root: PathBuf,
}

impl<'a> Resolver<'a> {
    pub fn new(overrides: &'a OverrideTable, detector: &'a LicenseDetector, root: &Path) -> Self {
        Self {
            overrides,
            detector,
            root: root.to_path_buf(),
        }
    }

    /// `None` when neither an override nor a license file covers `dep`.
    pub fn resolve(&self, dep: &Dependency) -> Option<Resolution> {
        self.resolve_manual(dep).or_else(|| self.resolve_auto(dep))
    }

    fn resolve_manual(&self, dep: &Dependency) -> Option<Resolution> {
        let (prefix, descriptor) = self.overrides.lookup(&dep.path)?;
        Some(Resolution {
            path: prefix,
            descriptor: descriptor.to_string(),
            source: LicenseSource::Manual,
        })
    }

    /// Walk from `root/<first segment>` down to the dependency's own directory
    /// and stop at the first level holding a recognizable license.
    fn resolve_auto(&self, dep: &Dependency) -> Option<Resolution> {
        let mut dir = self.root.clone();
        let mut relative: Vec<&str> = Vec::new();

        for segment in dep.segments() {
            dir.push(segment);
            relative.push(segment);
            if let Some(id) = self.detector.detect_license(&dir) {
                return Some(Resolution {
                    path: relative.join("/"),
                    descriptor: id.to_string(),
                    source: LicenseSource::Detected,
                });
            }
        }
        None
    }
}
