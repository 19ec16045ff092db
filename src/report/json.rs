use anyhow::Result;

use crate::aggregate::LicenseDocument;

/// Render the license document as pretty-printed JSON.
pub fn render(doc: &LicenseDocument) -> Result<String> {
    let mut out = serde_json::to_string_pretty(doc)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{LicenseBlock, ManualBlock};
    use serde_json::Value;

    #[test]
    fn test_render_json() {
        let doc = LicenseDocument {
            licenses: vec![LicenseBlock {
                id: "Apache-2.0".to_string(),
                packages: vec!["golang.org/x/sys".to_string()],
                text: "Apache License".to_string(),
            }],
            manual: vec![ManualBlock {
                package: "corp".to_string(),
                text: "Custom terms apply.".to_string(),
            }],
        };
        let json: Value = serde_json::from_str(&render(&doc).unwrap()).unwrap();
        assert_eq!(json["licenses"][0]["id"], "Apache-2.0");
        assert_eq!(json["licenses"][0]["packages"][0], "golang.org/x/sys");
        assert_eq!(json["manual"][0]["package"], "corp");
        assert_eq!(json["manual"][0]["text"], "Custom terms apply.");
    }
}
