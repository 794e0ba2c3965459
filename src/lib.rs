//! Post-build touch-ups for web distribution of a font family.
//!
//! A font is loaded, put through the [`TEMPORARY_TOUCHUPS`] profile, then
//! given fixed vertical metrics, web naming and a standard copyright string
//! by [`apply_web_specific_fixes`] before being written back out.
pub mod config;
mod error;
pub mod font;
pub mod metrics;
pub mod names;
pub mod naming;
pub mod style;
pub mod touchups;
mod webfix;

pub use crate::config::WebFixConfig;
pub use crate::error::{Result, TouchupError};
pub use crate::font::TouchupFont;
pub use crate::metrics::VerticalMetrics;
pub use crate::naming::{web_names, WebNames};
pub use crate::style::Style;
pub use crate::touchups::{apply_temporary_fixes, Touchup, TEMPORARY_TOUCHUPS};
pub use crate::webfix::apply_web_specific_fixes;
use std::path::Path;

fn correct(font: &mut TouchupFont, family_name: &str, config: &WebFixConfig) -> Result<()> {
    apply_temporary_fixes(font)?;
    apply_web_specific_fixes(font, family_name, config)
}

/// Corrects metrics and other meta information of the font at `source`,
/// writing the result to `target`.
pub fn correct_font<P, Q>(
    source: P,
    target: Q,
    family_name: &str,
    config: &WebFixConfig,
) -> Result<()>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let mut font = TouchupFont::load(source)?;
    correct(&mut font, family_name, config)?;
    font.save(target)
}

/// As [`correct_font`], on in-memory font data.
pub fn correct_font_bytes(
    data: Vec<u8>,
    family_name: &str,
    config: &WebFixConfig,
) -> Result<Vec<u8>> {
    let mut font = TouchupFont::from_bytes(data)?;
    correct(&mut font, family_name, config)?;
    font.to_bytes()
}
