use std::path::Path;

use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::aggregate::LicenseDocument;

/// Print a summary of the written license file.
pub fn render(doc: &LicenseDocument, out: &Path, verbose: bool, quiet: bool) {
    let bucketed: usize = doc.licenses.iter().map(|b| b.packages.len()).sum();
    let total = bucketed + doc.manual.len();

    if quiet {
        return;
    }

    eprintln!(
        "\n {} {} ({} packages, {} licenses, {} manual)",
        "✓".green(),
        format!("generated {}", out.display()).bold(),
        total,
        doc.licenses.len(),
        doc.manual.len()
    );

    if !verbose {
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("License").add_attribute(Attribute::Bold),
            Cell::new("Packages").add_attribute(Attribute::Bold),
            Cell::new("Count").add_attribute(Attribute::Bold),
        ]);

    for block in &doc.licenses {
        table.add_row(vec![
            Cell::new(&block.id).fg(Color::Green),
            Cell::new(block.packages.join("\n")),
            Cell::new(block.packages.len()).set_alignment(CellAlignment::Right),
        ]);
    }

    for entry in &doc.manual {
        table.add_row(vec![
            Cell::new(first_line(&entry.text)).fg(Color::Yellow),
            Cell::new(&entry.package),
            Cell::new(1).set_alignment(CellAlignment::Right),
        ]);
    }

    eprintln!("{}", table);
}

/// First non-empty line of a literal text, shortened for a table cell.
fn first_line(text: &str) -> String {
    const MAX: usize = 40;
    let line = text.lines().map(str::trim).find(|l| !l.is_empty()).unwrap_or("");
    if line.chars().count() > MAX {
        let short: String = line.chars().take(MAX).collect();
        format!("{}…", short)
    } else {
        line.to_string()
    }
}
