use std::collections::BTreeMap;

/// Canonical license texts shipped with the binary.
const EMBEDDED: &[(&str, &str)] = &[
    ("Apache-2.0", include_str!("../../licenses/Apache-2.0.txt")),
    ("FreeBSD", include_str!("../../licenses/FreeBSD.txt")),
    ("LGPL-3.0", include_str!("../../licenses/LGPL-3.0.txt")),
    ("MIT", include_str!("../../licenses/MIT.txt")),
    ("MPL-2.0", include_str!("../../licenses/MPL-2.0.txt")),
    ("NewBSD", include_str!("../../licenses/NewBSD.txt")),
];

/// Identifier → full license text.
#[derive(Debug, Clone)]
pub struct LicenseTexts {
    texts: BTreeMap<String, String>,
}

impl Default for LicenseTexts {
    /// The embedded texts only.
    fn default() -> Self {
        let texts = EMBEDDED
            .iter()
            .map(|(id, text)| (id.to_string(), text.to_string()))
            .collect();
        Self { texts }
    }
}

impl LicenseTexts {
    /// Add or replace the canonical text for `id`.
    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>) {
        self.texts.insert(id.into(), text.into());
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.texts.get(id).map(String::as_str)
    }

    /// Map a single-word descriptor onto a key of the table.
    ///
    /// Tries an exact match, then a case-insensitive one, then the SPDX name
    /// of a license the table keys differently.
    pub fn canonical_id(&self, id: &str) -> Option<&str> {
        let id = id.trim();
        if let Some((key, _)) = self.texts.get_key_value(id) {
            return Some(key.as_str());
        }
        if let Some(key) = self.texts.keys().find(|k| k.eq_ignore_ascii_case(id)) {
            return Some(key.as_str());
        }
        let alias = spdx_alias(id)?;
        self.texts.get_key_value(alias).map(|(key, _)| key.as_str())
    }
}

/// SPDX identifiers whose text is stored under a different key.
fn spdx_alias(id: &str) -> Option<&'static str> {
    match id.to_ascii_uppercase().as_str() {
        "BSD-3-CLAUSE" => Some("NewBSD"),
        "BSD-2-CLAUSE" | "BSD-2-CLAUSE-FREEBSD" => Some("FreeBSD"),
        "APACHE-2" | "APACHE2" => Some("Apache-2.0"),
        "LGPL-3.0-ONLY" | "LGPL-3.0-OR-LATER" => Some("LGPL-3.0"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_texts() {
        let texts = LicenseTexts::default();
        assert!(texts.get("MIT").unwrap().contains("Permission is hereby granted"));
        assert!(texts.get("Apache-2.0").unwrap().starts_with("Apache License"));
        assert!(texts.get("NewBSD").unwrap().contains("Neither the name"));
    }

    #[test]
    fn test_canonical_id() {
        let texts = LicenseTexts::default();
        assert_eq!(texts.canonical_id("MIT"), Some("MIT"));
        assert_eq!(texts.canonical_id("mit"), Some("MIT"));
        assert_eq!(texts.canonical_id("BSD-3-Clause"), Some("NewBSD"));
        assert_eq!(texts.canonical_id("GPL-2.0"), None);
    }

    #[test]
    fn test_insert_extends_table() {
        let mut texts = LicenseTexts::default();
        texts.insert("ISC", "ISC License");
        assert_eq!(texts.canonical_id("isc"), Some("ISC"));
        assert_eq!(texts.get("ISC"), Some("ISC License"));
    }
}
