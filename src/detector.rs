use std::path::{Path, PathBuf};

use anyhow::Result;
use regex::Regex;

use crate::license::classifier::classify_text;

/// Sniffs directories for license files and classifies their text.
pub struct LicenseDetector {
    file_re: Regex,
}

impl LicenseDetector {
    pub fn new() -> Result<Self> {
        // LICENSE, LICENCE.md, UNLICENSE, COPYING.txt, LICENSE-MIT, MIT-LICENSE.txt, ...
        let file_re = Regex::new(
            r"(?i)^([a-z0-9+.\-]+[-_])?((un)?licen[cs]e|copying)([-_][a-z0-9+\-]+(\.[0-9]+)*)?(\.(txt|md|markdown|rst))?$",
        )?;
        Ok(Self { file_re })
    }

    /// Detect the license of `dir` from the license files directly inside it.
    ///
    /// Candidates are tried in name order; the first one with recognizable text
    /// wins. A missing directory is simply "not detected".
    pub fn detect_license(&self, dir: &Path) -> Option<&'static str> {
        let entries = std::fs::read_dir(dir).ok()?;

        let mut candidates: Vec<PathBuf> = entries
            .filter_map(|e| e.ok())
            // follows symlinks
            .filter(|e| e.path().is_file())
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .map(|name| self.file_re.is_match(name))
                    .unwrap_or(false)
            })
            .map(|e| e.path())
            .collect();
        candidates.sort();

        candidates.into_iter().find_map(|file| {
            let bytes = std::fs::read(file).ok()?;
            classify_text(&String::from_utf8_lossy(&bytes))
        })
    }
}
