//! Renderers for the aggregated license document.
//!
//! - [`text`] — the plain `THIRD_PARTY_LICENSE` file.
//! - [`json`] — the same content as structured JSON.
//! - [`terminal`] — colored summary table printed with `--verbose`.

pub mod json;
pub mod terminal;
pub mod text;

use anyhow::Result;

use crate::aggregate::LicenseDocument;
use crate::cli::OutputFormat;

/// Render `doc` in the requested output file format.
pub fn render(doc: &LicenseDocument, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render(doc)),
        OutputFormat::Json => json::render(doc),
    }
}
