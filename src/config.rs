use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::license::spdx::LicenseTexts;

/// Name of the manual override file looked up in each project directory.
pub const OVERRIDE_FILE: &str = "manualLicense.json";

/// Tool configuration, deserialized from `.license-collector/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Extra canonical license texts keyed by identifier (e.g. `"ISC"`).
    #[serde(default)]
    pub licenses: BTreeMap<String, LicenseTextSource>,

    /// Directory relative `file` entries are resolved against.
    #[serde(skip)]
    base_dir: PathBuf,
}

/// A canonical license text given inline or as a file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum LicenseTextSource {
    Inline(String),
    File { file: PathBuf },
}

impl Config {
    /// Build the canonical text table: the embedded texts plus configured ones.
    pub fn license_texts(&self) -> Result<LicenseTexts> {
        let mut texts = LicenseTexts::default();
        for (id, source) in &self.licenses {
            let text = match source {
                LicenseTextSource::Inline(text) => text.clone(),
                LicenseTextSource::File { file } => {
                    let path = self.base_dir.join(file);
                    std::fs::read_to_string(&path).with_context(|| {
                        format!("failed to read license text for {} from {}", id, path.display())
                    })?
                }
            };
            texts.insert(id.clone(), text);
        }
        Ok(texts)
    }
}

/// Load the tool configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<cwd>/.license-collector/config.toml`
/// 3. `~/.config/license-collector/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(cwd: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = cwd.join(".license-collector").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("license-collector")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
    Ok(config)
}

/// Manually curated `path prefix → license descriptor` table.
///
/// A descriptor is either a license identifier (`"MIT"`) or a full license
/// text.
#[derive(Debug, Default, Clone)]
pub struct OverrideTable {
    entries: HashMap<String, String>,
}

impl OverrideTable {
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the override covering `path`.
    ///
    /// Prefixes are tried shortest first (`a`, `a/b`, `a/b/c`), so an entry
    /// for a parent directory shadows entries for its children. Returns the
    /// matched prefix and its descriptor.
    pub fn lookup<'a>(&'a self, path: &str) -> Option<(String, &'a str)> {
        let mut prefix = String::new();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(segment);
            if let Some(descriptor) = self.entries.get(&prefix) {
                return Some((prefix, descriptor.as_str()));
            }
        }
        None
    }
}

/// Load `manualLicense.json` from `project_dir`. A missing file yields an
/// empty table; a malformed one is an error.
pub fn load_overrides(project_dir: &Path) -> Result<OverrideTable> {
    let path = project_dir.join(OVERRIDE_FILE);
    if !path.is_file() {
        return Ok(OverrideTable::default());
    }
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let entries: HashMap<String, String> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(OverrideTable::from_entries(entries))
}
