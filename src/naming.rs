//! Derivation of the web family/subfamily naming scheme.
//!
//! Only the four style-linked subfamilies (Regular, Bold, Italic, Bold
//! Italic) share the target family name. Every other weight becomes a family
//! of its own ("Roboto Light") whose subfamily collapses to Regular or
//! Italic.
use crate::style::Style;

/// Marker appended to the family when the source family is a condensed one.
pub const CONDENSED: &str = "Condensed";

/// The name strings derived for one font.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct WebNames {
    /// nameID 16
    pub typographic_family: String,
    /// nameID 1
    pub family: String,
    /// nameID 2; `None` leaves the existing record alone.
    pub subfamily: Option<String>,
    /// nameIDs 3 and 4
    pub full_name: String,
    /// nameID 6
    pub postscript_name: String,
}

/// Compute the web names for a font.
///
/// `family` is the requested family name, `original_family` the font's
/// current nameID 1 and `style` its parsed subfamily.
pub fn web_names(family: &str, original_family: &str, style: Style) -> WebNames {
    let mut family = family.to_string();
    if original_family.contains(CONDENSED) {
        family.push(' ');
        family.push_str(CONDENSED);
    }
    let subfamily = style.name();

    let full_name = if style == Style::Regular {
        family.clone()
    } else {
        format!("{} {}", family, subfamily)
    };

    let (legacy_family, legacy_subfamily) = if style.is_ribbi() {
        (family.clone(), None)
    } else {
        let weight = style.weight();
        let legacy_family = if weight == "Regular" {
            family.clone()
        } else {
            format!("{} {}", family, weight)
        };
        let legacy_subfamily = if style.is_italic() {
            "Italic"
        } else {
            "Regular"
        };
        (legacy_family, Some(legacy_subfamily.to_string()))
    };

    let postscript_name = format!("{}-{}", family, subfamily).replace(' ', "");

    WebNames {
        typographic_family: family,
        family: legacy_family,
        subfamily: legacy_subfamily,
        full_name,
        postscript_name,
    }
}
