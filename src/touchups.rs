//! Preliminary corrections applied before the web fixes
use crate::error::Result;
use crate::font::TouchupFont;
use crate::names;
use crate::style::Style;
use write_fonts::tables::head::MacStyle;
use write_fonts::tables::os2::SelectionFlags;

pub struct Touchup<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub apply: &'a dyn Fn(&mut TouchupFont) -> Result<()>,
}

impl Touchup<'_> {
    pub fn run(&self, font: &mut TouchupFont) -> Result<()> {
        log::info!("Applying {}", self.id);
        log::debug!("  {}", self.title);
        (self.apply)(font)
    }
}

fn fix_weight_class(font: &mut TouchupFont) -> Result<()> {
    let subfamily = font.required_name(names::SUBFAMILY)?;
    match subfamily.parse::<Style>() {
        Ok(style) => {
            log::debug!(
                "usWeightClass {} -> {}",
                font.os2.us_weight_class,
                style.weight_class()
            );
            font.os2.us_weight_class = style.weight_class();
        }
        // reported by the web fixes
        Err(_) => log::warn!("Leaving usWeightClass alone for subfamily '{}'", subfamily),
    }
    Ok(())
}

pub const WEIGHT_CLASS_TOUCHUP: Touchup = Touchup {
    id: "weight_class",
    title: "Set OS/2.usWeightClass from the subfamily weight",
    apply: &fix_weight_class,
};

fn fix_black_bold_bits(font: &mut TouchupFont) -> Result<()> {
    let family = font.required_name(names::FAMILY)?;
    if family.ends_with("Black") {
        font.head.mac_style.insert(MacStyle::BOLD);
        font.os2.fs_selection.insert(SelectionFlags::BOLD);
        font.os2.fs_selection.remove(SelectionFlags::REGULAR);
    }
    Ok(())
}

pub const BLACK_BOLD_BITS_TOUCHUP: Touchup = Touchup {
    id: "black_bold_bits",
    title: "Set the bold bits in head.macStyle and OS/2.fsSelection for Black families",
    apply: &fix_black_bold_bits,
};

pub const TEMPORARY_TOUCHUPS: [Touchup<'_>; 2] = [WEIGHT_CLASS_TOUCHUP, BLACK_BOLD_BITS_TOUCHUP];

pub fn apply_temporary_fixes(font: &mut TouchupFont) -> Result<()> {
    for touchup in TEMPORARY_TOUCHUPS.iter() {
        touchup.run(font)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::tests::test_font;

    #[test]
    fn weight_class_follows_subfamily() {
        for (subfamily, class) in [
            ("Thin", 100),
            ("Light Italic", 300),
            ("Italic", 400),
            ("Medium", 500),
            ("Bold Italic", 700),
            ("Black", 900),
        ] {
            let mut font = TouchupFont::from_bytes(test_font("Roboto", subfamily)).unwrap();
            WEIGHT_CLASS_TOUCHUP.run(&mut font).unwrap();
            assert_eq!(font.os2.us_weight_class, class, "{}", subfamily);
        }
    }

    #[test]
    fn weight_class_skips_unknown_styles() {
        let mut font = TouchupFont::from_bytes(test_font("Roboto", "Semibold")).unwrap();
        WEIGHT_CLASS_TOUCHUP.run(&mut font).unwrap();
        assert_eq!(font.os2.us_weight_class, 400);
    }

    #[test]
    fn black_family_gets_bold_bits() {
        let mut font = TouchupFont::from_bytes(test_font("Roboto Black", "Regular")).unwrap();
        font.os2.fs_selection.insert(SelectionFlags::REGULAR);
        BLACK_BOLD_BITS_TOUCHUP.run(&mut font).unwrap();
        assert!(font.head.mac_style.contains(MacStyle::BOLD));
        assert!(font.os2.fs_selection.contains(SelectionFlags::BOLD));
        assert!(!font.os2.fs_selection.contains(SelectionFlags::REGULAR));
    }

    #[test]
    fn other_families_untouched() {
        let mut font = TouchupFont::from_bytes(test_font("Roboto", "Black")).unwrap();
        BLACK_BOLD_BITS_TOUCHUP.run(&mut font).unwrap();
        assert!(!font.head.mac_style.contains(MacStyle::BOLD));
        assert!(!font.os2.fs_selection.contains(SelectionFlags::BOLD));
    }
}
