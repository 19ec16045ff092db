use crate::aggregate::LicenseDocument;

/// Render the license file: for each license, the packages under it (one per
/// line) followed by its text; then each manual entry's package followed by
/// its literal text.
pub fn render(doc: &LicenseDocument) -> String {
    let mut out = String::new();

    for block in &doc.licenses {
        for package in &block.packages {
            out.push_str(package);
            out.push('\n');
        }
        out.push_str(&block.text);
        out.push('\n');
    }

    for entry in &doc.manual {
        out.push_str(&entry.package);
        out.push('\n');
        out.push_str(&entry.text);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{LicenseBlock, ManualBlock};

    #[test]
    fn test_render_text() {
        let doc = LicenseDocument {
            licenses: vec![LicenseBlock {
                id: "MIT".to_string(),
                packages: vec!["a".to_string(), "b/c".to_string()],
                text: "MIT TEXT".to_string(),
            }],
            manual: vec![ManualBlock {
                package: "corp".to_string(),
                text: "Custom terms apply.".to_string(),
            }],
        };
        assert_eq!(render(&doc), "a\nb/c\nMIT TEXT\ncorp\nCustom terms apply.\n");
    }

    #[test]
    fn test_render_empty() {
        let doc = LicenseDocument {
            licenses: vec![],
            manual: vec![],
        };
        assert_eq!(render(&doc), "");
    }
}
