use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::error::CollectError;
use crate::license::spdx::LicenseTexts;
use crate::models::{LicenseSource, Resolution};

/// Resolved licenses of a run, before rendering.
///
/// Dependencies sharing a canonical license are grouped under its identifier;
/// everything else is kept as a literal entry. A path lands in at most one
/// place: the first resolution recorded for it wins, compared
/// case-insensitively.
#[derive(Debug, Default)]
pub struct LicenseSet {
    buckets: BTreeMap<String, Vec<String>>,
    literals: BTreeMap<String, String>,
    seen: HashSet<String>,
}

/// Where [`LicenseSet::insert`] put a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Bucket,
    Literal,
    /// Path already recorded, or an empty override descriptor.
    Skipped,
}

impl LicenseSet {
    pub fn insert(&mut self, resolution: &Resolution, texts: &LicenseTexts) -> Placement {
        let descriptor = resolution.descriptor.trim();
        // An empty override excludes the dependency from the output.
        if descriptor.is_empty() {
            return Placement::Skipped;
        }
        if !self.seen.insert(resolution.path.to_lowercase()) {
            return Placement::Skipped;
        }

        let single_word = !descriptor.contains(char::is_whitespace);
        let canonical = if single_word {
            texts.canonical_id(descriptor)
        } else {
            None
        };

        match (resolution.source, canonical) {
            (_, Some(id)) => {
                self.bucket(id.to_string(), &resolution.path);
                Placement::Bucket
            }
            // Unknown detected identifiers are rejected in `build`.
            (LicenseSource::Detected, None) => {
                self.bucket(descriptor.to_string(), &resolution.path);
                Placement::Bucket
            }
            (LicenseSource::Manual, None) => {
                self.literals
                    .insert(resolution.path.clone(), resolution.descriptor.clone());
                Placement::Literal
            }
        }
    }

    fn bucket(&mut self, id: String, path: &str) {
        self.buckets.entry(id).or_default().push(path.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty() && self.literals.is_empty()
    }

    /// Attach canonical texts to every bucket.
    ///
    /// Fails with [`CollectError::UnknownLicense`] listing all buckets whose
    /// identifier has no canonical text.
    pub fn build(self, texts: &LicenseTexts) -> Result<LicenseDocument, CollectError> {
        let mut licenses = Vec::new();
        let mut unknown = Vec::new();

        for (id, packages) in self.buckets {
            match texts.get(&id) {
                Some(text) => licenses.push(LicenseBlock {
                    id,
                    packages,
                    text: text.to_string(),
                }),
                None => unknown.push((id, packages)),
            }
        }

        if !unknown.is_empty() {
            return Err(CollectError::UnknownLicense { entries: unknown });
        }

        let manual = self
            .literals
            .into_iter()
            .map(|(package, text)| ManualBlock { package, text })
            .collect();

        Ok(LicenseDocument { licenses, manual })
    }
}

/// The aggregated license file content.
#[derive(Debug, Clone, Serialize)]
pub struct LicenseDocument {
    pub licenses: Vec<LicenseBlock>,
    pub manual: Vec<ManualBlock>,
}

/// Dependencies sharing one canonical license text.
#[derive(Debug, Clone, Serialize)]
pub struct LicenseBlock {
    pub id: String,
    pub packages: Vec<String>,
    pub text: String,
}

/// A dependency whose license text is embedded verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct ManualBlock {
    pub package: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detected(path: &str, id: &str) -> Resolution {
        Resolution {
            path: path.to_string(),
            descriptor: id.to_string(),
            source: LicenseSource::Detected,
        }
    }

    fn manual(path: &str, descriptor: &str) -> Resolution {
        Resolution {
            path: path.to_string(),
            descriptor: descriptor.to_string(),
            source: LicenseSource::Manual,
        }
    }

    #[test]
    fn test_groups_same_identifier() {
        let texts = LicenseTexts::default();
        let mut set = LicenseSet::default();
        set.insert(&detected("github.com/a/one", "MIT"), &texts);
        set.insert(&detected("github.com/b/two", "MIT"), &texts);
        set.insert(&detected("GitHub.com/A/One", "MIT"), &texts);

        let doc = set.build(&texts).unwrap();
        assert_eq!(doc.licenses.len(), 1);
        assert_eq!(doc.licenses[0].id, "MIT");
        assert_eq!(doc.licenses[0].packages, vec!["github.com/a/one", "github.com/b/two"]);
        assert!(doc.manual.is_empty());
    }

    #[test]
    fn test_manual_identifier_joins_bucket() {
        let texts = LicenseTexts::default();
        let mut set = LicenseSet::default();
        assert_eq!(set.insert(&manual("left-pad", "mit"), &texts), Placement::Bucket);
        assert_eq!(set.insert(&detected("express", "MIT"), &texts), Placement::Bucket);

        let doc = set.build(&texts).unwrap();
        assert_eq!(doc.licenses[0].packages, vec!["left-pad", "express"]);
    }

    #[test]
    fn test_manual_text_is_literal() {
        let texts = LicenseTexts::default();
        let mut set = LicenseSet::default();
        let text = "Copyright 2019 Corp.\nAll rights reserved.";
        assert_eq!(set.insert(&manual("@corp", text), &texts), Placement::Literal);
        assert_eq!(set.insert(&manual("tiny", "WTFPL"), &texts), Placement::Literal);

        let doc = set.build(&texts).unwrap();
        assert!(doc.licenses.is_empty());
        assert_eq!(doc.manual.len(), 2);
        assert_eq!(doc.manual[0].package, "@corp");
        assert_eq!(doc.manual[0].text, text);
        assert_eq!(doc.manual[1].text, "WTFPL");
    }

    #[test]
    fn test_path_in_at_most_one_bucket() {
        let texts = LicenseTexts::default();
        let mut set = LicenseSet::default();
        set.insert(&detected("shared", "MIT"), &texts);
        assert_eq!(set.insert(&manual("shared", "some text"), &texts), Placement::Skipped);
        let doc = set.build(&texts).unwrap();
        assert_eq!(doc.licenses[0].packages, vec!["shared"]);
        assert!(doc.manual.is_empty());
    }

    #[test]
    fn test_empty_descriptor_skipped() {
        let texts = LicenseTexts::default();
        let mut set = LicenseSet::default();
        assert_eq!(set.insert(&manual("internal", ""), &texts), Placement::Skipped);
        assert!(set.is_empty());
    }

    #[test]
    fn test_unknown_identifier_fails() {
        let texts = LicenseTexts::default();
        let mut set = LicenseSet::default();
        set.insert(&detected("a", "MIT"), &texts);
        set.insert(&detected("b", "GPL-2.0"), &texts);
        set.insert(&detected("c", "ISC"), &texts);

        match set.build(&texts) {
            Err(CollectError::UnknownLicense { entries }) => {
                let ids: Vec<&str> = entries.iter().map(|(id, _)| id.as_str()).collect();
                assert_eq!(ids, vec!["GPL-2.0", "ISC"]);
                assert_eq!(entries[0].1, vec!["b"]);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_configured_text_accepts_identifier() {
        let mut texts = LicenseTexts::default();
        texts.insert("ISC", "ISC License");
        let mut set = LicenseSet::default();
        set.insert(&detected("c", "ISC"), &texts);
        let doc = set.build(&texts).unwrap();
        assert_eq!(doc.licenses[0].text, "ISC License");
    }
}
