use std::path::PathBuf;

use thiserror::Error;

use crate::models::Ecosystem;

/// Failures of a collection run that callers may want to tell apart.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("{ecosystem} manifest not found: {}", path.display())]
    ManifestNotFound { ecosystem: Ecosystem, path: PathBuf },

    #[error("no licenses handled")]
    NoLicensesHandled,

    #[error("license missing for {} dependencies: {}", packages.len(), packages.join(", "))]
    LicenseMissing { packages: Vec<String> },

    #[error("wrong license files for the following libs:{}", format_unknown(entries))]
    UnknownLicense { entries: Vec<(String, Vec<String>)> },
}

fn format_unknown(entries: &[(String, Vec<String>)]) -> String {
    entries
        .iter()
        .map(|(id, paths)| format!("\n  {}: [{}]", id, paths.join(", ")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_license_message_lists_every_bucket() {
        let err = CollectError::UnknownLicense {
            entries: vec![
                ("GPL-2.0".to_string(), vec!["a/b".to_string(), "c".to_string()]),
                ("ISC".to_string(), vec!["d".to_string()]),
            ],
        };
        let msg = err.to_string();
        assert!(msg.contains("GPL-2.0: [a/b, c]"));
        assert!(msg.contains("ISC: [d]"));
    }

    #[test]
    fn test_missing_message() {
        let err = CollectError::LicenseMissing {
            packages: vec!["left-pad".to_string()],
        };
        assert_eq!(err.to_string(), "license missing for 1 dependencies: left-pad");
    }
}
