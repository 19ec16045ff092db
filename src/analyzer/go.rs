use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regex::Regex;

use crate::error::CollectError;
use crate::models::{Dependency, Ecosystem};

const VENDOR_DIR: &str = "vendor";
const MODULES_FILE: &str = "modules.txt";

/// Analyzer for vendored Go modules (`go mod vendor`).
///
/// Reads `vendor/modules.txt` and takes every `# <module> <version>` marker.
/// Package lines and `## explicit` annotations are ignored.
pub struct GoAnalyzer {
    project: PathBuf,
}

impl GoAnalyzer {
    pub fn new(project: impl Into<PathBuf>) -> Self {
        Self {
            project: project.into(),
        }
    }
}

impl super::Analyzer for GoAnalyzer {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Go
    }

    fn project_dir(&self) -> &Path {
        &self.project
    }

    fn dependency_root(&self) -> PathBuf {
        self.project.join(VENDOR_DIR)
    }

    fn analyze(&self) -> Result<Vec<Dependency>> {
        let modules = self.dependency_root().join(MODULES_FILE);
        if !modules.is_file() {
            return Err(CollectError::ManifestNotFound {
                ecosystem: Ecosystem::Go,
                path: modules,
            })
            .context("Go dependencies are not vendored, run 'go mod vendor'");
        }

        let content = std::fs::read_to_string(&modules)
            .with_context(|| format!("failed to read {}", modules.display()))?;
        parse_modules_txt(&content)
    }
}

/// Extract module paths from the contents of `modules.txt`, in file order.
fn parse_modules_txt(content: &str) -> Result<Vec<Dependency>> {
    let marker_re = Regex::new(r"^#\s+(\S+)")?;
    let mut seen: HashSet<&str> = HashSet::new();
    let mut deps = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        // "## explicit" annotations (Go 1.14+)
        if line.starts_with("##") {
            continue;
        }
        if let Some(caps) = marker_re.captures(line) {
            let module = caps.get(1).map_or("", |m| m.as_str());
            if !module.is_empty() && seen.insert(module) {
                deps.push(Dependency::new(module, Ecosystem::Go));
            }
        }
    }

    Ok(deps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Analyzer;
    use tempfile::tempdir;

    const MODULES_TXT: &str = "\
# github.com/pkg/errors v0.9.1
## explicit
github.com/pkg/errors
# golang.org/x/sys v0.0.0-20200116001909-b77594299b42
golang.org/x/sys/unix
golang.org/x/sys/windows
# github.com/old/mod v1.0.0 => github.com/new/mod v1.1.0
## explicit; go 1.16
github.com/old/mod
# github.com/pkg/errors v0.9.1
";

    #[test]
    fn test_parse_modules_txt() {
        let deps = parse_modules_txt(MODULES_TXT).unwrap();
        let paths: Vec<&str> = deps.iter().map(|d| d.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["github.com/pkg/errors", "golang.org/x/sys", "github.com/old/mod"]
        );
        assert!(deps.iter().all(|d| d.ecosystem == Ecosystem::Go));
    }

    #[test]
    fn test_only_annotations() {
        let deps = parse_modules_txt("## explicit\n## explicit; go 1.17\n").unwrap();
        assert!(deps.is_empty());
    }

    #[test]
    fn test_analyze_reads_vendor_modules() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("vendor")).unwrap();
        std::fs::write(dir.path().join("vendor/modules.txt"), MODULES_TXT).unwrap();

        let analyzer = GoAnalyzer::new(dir.path());
        assert_eq!(analyzer.dependency_root(), dir.path().join("vendor"));
        assert_eq!(analyzer.analyze().unwrap().len(), 3);
    }

    #[test]
    fn test_missing_manifest() {
        let dir = tempdir().unwrap();
        let err = GoAnalyzer::new(dir.path()).analyze().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CollectError>(),
            Some(CollectError::ManifestNotFound {
                ecosystem: Ecosystem::Go,
                ..
            })
        ));
    }
}
