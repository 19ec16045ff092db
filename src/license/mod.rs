//! License text identification and the canonical text table.
//!
//! - [`spdx`] — identifier → full text table, seeded with embedded texts and
//!   extended from the tool config.
//! - [`classifier`] — guesses the identifier of a license file from its text.

pub mod classifier;
pub mod spdx;
