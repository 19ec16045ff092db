/// A third-party dependency named by a manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct Dependency {
    /// Module path (Go) or package name (npm), `/`-separated.
    pub path: String,
    pub ecosystem: Ecosystem,
}

impl Dependency {
    pub fn new(path: impl Into<String>, ecosystem: Ecosystem) -> Self {
        Self {
            path: path.into(),
            ecosystem,
        }
    }

    /// Non-empty `/`-separated segments of the dependency path.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ecosystem {
    Go,
    Npm,
}

impl std::fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ecosystem::Go => write!(f, "Go"),
            Ecosystem::Npm => write!(f, "npm"),
        }
    }
}

/// Where a resolved license descriptor came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseSource {
    /// The manual override table.
    Manual,
    /// A license file sniffed in the dependency's directory tree.
    Detected,
}

impl std::fmt::Display for LicenseSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LicenseSource::Manual => write!(f, "manual"),
            LicenseSource::Detected => write!(f, "detected"),
        }
    }
}

/// Outcome of resolving one dependency.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Path the license is reported under: the matched override prefix, or the
    /// directory (relative to the dependency root) holding the license file.
    pub path: String,
    /// License identifier or literal license text.
    pub descriptor: String,
    pub source: LicenseSource,
}
