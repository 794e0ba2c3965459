use crate::config::WebFixConfig;
use crate::error::Result;
use crate::font::TouchupFont;
use crate::metrics::VerticalMetrics;
use crate::names;
use crate::naming::web_names;
use crate::style::Style;

/// Apply fixes needed for web fonts.
///
/// Fails with [`crate::TouchupError::UnknownStyle`] when the subfamily is not
/// one of the twelve known styles; the font may already have had its metrics
/// changed at that point, so it should not be saved.
pub fn apply_web_specific_fixes(
    font: &mut TouchupFont,
    family_name: &str,
    config: &WebFixConfig,
) -> Result<()> {
    log::debug!(
        "OS/2 metrics {:?} -> {:?}",
        VerticalMetrics::of(&font.os2),
        config.metrics
    );
    config.metrics.apply(&mut font.os2);

    let subfamily = font.required_name(names::SUBFAMILY)?;
    let style: Style = subfamily.parse()?;
    let original_family = font.required_name(names::FAMILY)?;

    let derived = web_names(family_name, &original_family, style);
    log::info!(
        "{} {} -> {} / {}",
        original_family,
        style,
        derived.full_name,
        derived.postscript_name
    );

    font.set_name(names::TYPOGRAPHIC_FAMILY, &derived.typographic_family);
    font.set_name(names::FAMILY, &derived.family);
    if let Some(subfamily) = &derived.subfamily {
        font.set_name(names::SUBFAMILY, subfamily);
    }

    font.set_name(names::UNIQUE_ID, &derived.full_name);
    font.set_name(names::FULL_NAME, &derived.full_name);
    font.clear_name(names::COMPATIBLE_FULL_NAME);

    font.set_name(names::POSTSCRIPT_NAME, &derived.postscript_name);
    font.set_name(names::COPYRIGHT, &config.copyright);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TouchupError;
    use crate::font::tests::test_font;
    use pretty_assertions::assert_eq;

    fn fixed(family: &str, subfamily: &str) -> TouchupFont {
        let mut font = TouchupFont::from_bytes(test_font(family, subfamily)).unwrap();
        apply_web_specific_fixes(&mut font, "Roboto", &WebFixConfig::default()).unwrap();
        font
    }

    fn name(font: &TouchupFont, name_id: write_fonts::types::NameId) -> Option<String> {
        font.name_string(name_id)
    }

    #[test]
    fn bold() {
        let font = fixed("Roboto", "Bold");
        assert_eq!(name(&font, names::FAMILY).as_deref(), Some("Roboto"));
        assert_eq!(name(&font, names::SUBFAMILY).as_deref(), Some("Bold"));
        assert_eq!(name(&font, names::UNIQUE_ID).as_deref(), Some("Roboto Bold"));
        assert_eq!(name(&font, names::FULL_NAME).as_deref(), Some("Roboto Bold"));
        assert_eq!(
            name(&font, names::POSTSCRIPT_NAME).as_deref(),
            Some("Roboto-Bold")
        );
        assert_eq!(
            name(&font, names::TYPOGRAPHIC_FAMILY).as_deref(),
            Some("Roboto")
        );
    }

    #[test]
    fn light() {
        let font = fixed("Roboto", "Light");
        assert_eq!(name(&font, names::FAMILY).as_deref(), Some("Roboto Light"));
        assert_eq!(name(&font, names::SUBFAMILY).as_deref(), Some("Regular"));
        assert_eq!(name(&font, names::FULL_NAME).as_deref(), Some("Roboto Light"));
        assert_eq!(
            name(&font, names::POSTSCRIPT_NAME).as_deref(),
            Some("Roboto-Light")
        );
    }

    #[test]
    fn light_italic() {
        let font = fixed("Roboto", "Light Italic");
        assert_eq!(name(&font, names::FAMILY).as_deref(), Some("Roboto Light"));
        assert_eq!(name(&font, names::SUBFAMILY).as_deref(), Some("Italic"));
        assert_eq!(
            name(&font, names::FULL_NAME).as_deref(),
            Some("Roboto Light Italic")
        );
        assert_eq!(
            name(&font, names::POSTSCRIPT_NAME).as_deref(),
            Some("Roboto-LightItalic")
        );
    }

    #[test]
    fn condensed_regular() {
        let font = fixed("Roboto Condensed", "Regular");
        assert_eq!(
            name(&font, names::FAMILY).as_deref(),
            Some("Roboto Condensed")
        );
        assert_eq!(
            name(&font, names::TYPOGRAPHIC_FAMILY).as_deref(),
            Some("Roboto Condensed")
        );
        assert_eq!(
            name(&font, names::FULL_NAME).as_deref(),
            Some("Roboto Condensed")
        );
    }

    #[test]
    fn copyright_and_compatible_name() {
        let font = fixed("Roboto", "Medium Italic");
        assert_eq!(
            name(&font, names::COPYRIGHT).as_deref(),
            Some("Copyright 2011 Google Inc. All Rights Reserved.")
        );
        assert_eq!(name(&font, names::COMPATIBLE_FULL_NAME), None);
    }

    #[test]
    fn metrics_are_fixed_and_idempotent() {
        let mut font = TouchupFont::from_bytes(test_font("Roboto", "Thin")).unwrap();
        let config = WebFixConfig::default();
        apply_web_specific_fixes(&mut font, "Roboto", &config).unwrap();
        let once = VerticalMetrics::of(&font.os2);
        assert_eq!(once, VerticalMetrics::default());
        apply_web_specific_fixes(&mut font, "Roboto", &config).unwrap();
        assert_eq!(VerticalMetrics::of(&font.os2), once);
    }

    #[test]
    fn configured_values_are_used() {
        let mut font = TouchupFont::from_bytes(test_font("Roboto", "Regular")).unwrap();
        let config = WebFixConfig {
            metrics: VerticalMetrics {
                win_ascent: 2000,
                ..Default::default()
            },
            copyright: "Copyright 2015 Google Inc.".to_string(),
        };
        apply_web_specific_fixes(&mut font, "Roboto", &config).unwrap();
        assert_eq!(font.os2.us_win_ascent, 2000);
        assert_eq!(
            name(&font, names::COPYRIGHT).as_deref(),
            Some("Copyright 2015 Google Inc.")
        );
    }

    #[test]
    fn every_known_style() {
        let expected = [
            ("Thin", "Roboto Thin", "Regular"),
            ("Thin Italic", "Roboto Thin", "Italic"),
            ("Light", "Roboto Light", "Regular"),
            ("Light Italic", "Roboto Light", "Italic"),
            ("Regular", "Roboto", "Regular"),
            ("Italic", "Roboto", "Italic"),
            ("Medium", "Roboto Medium", "Regular"),
            ("Medium Italic", "Roboto Medium", "Italic"),
            ("Bold", "Roboto", "Bold"),
            ("Bold Italic", "Roboto", "Bold Italic"),
            ("Black", "Roboto Black", "Regular"),
            ("Black Italic", "Roboto Black", "Italic"),
        ];
        assert_eq!(expected.len(), Style::ALL.len());
        for (subfamily, family, web_subfamily) in expected {
            let font = fixed("Roboto", subfamily);
            assert_eq!(
                name(&font, names::FAMILY).as_deref(),
                Some(family),
                "{}",
                subfamily
            );
            assert_eq!(
                name(&font, names::SUBFAMILY).as_deref(),
                Some(web_subfamily),
                "{}",
                subfamily
            );
            assert_eq!(
                name(&font, names::TYPOGRAPHIC_FAMILY).as_deref(),
                Some("Roboto"),
                "{}",
                subfamily
            );
        }
    }

    #[test]
    fn unknown_style_fails() {
        for bad in ["Semibold", "BoldItalic", "Condensed Bold"] {
            let mut font = TouchupFont::from_bytes(test_font("Roboto", bad)).unwrap();
            let err = apply_web_specific_fixes(&mut font, "Roboto", &WebFixConfig::default())
                .unwrap_err();
            assert!(matches!(err, TouchupError::UnknownStyle { ref name } if name == bad));
        }
    }
}
