//! The closed set of subfamily names a family may use
use crate::error::TouchupError;
use std::str::FromStr;

/// Subfamily names which take part in legacy style-linking.
pub const RIBBI_STYLE_NAMES: [&str; 4] = ["Regular", "Bold", "Italic", "Bold Italic"];

/// One of the twelve recognised subfamily names.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Style {
    Thin,
    ThinItalic,
    Light,
    LightItalic,
    Regular,
    Italic,
    Medium,
    MediumItalic,
    Bold,
    BoldItalic,
    Black,
    BlackItalic,
}

impl Style {
    pub const ALL: [Style; 12] = [
        Style::Thin,
        Style::ThinItalic,
        Style::Light,
        Style::LightItalic,
        Style::Regular,
        Style::Italic,
        Style::Medium,
        Style::MediumItalic,
        Style::Bold,
        Style::BoldItalic,
        Style::Black,
        Style::BlackItalic,
    ];

    pub fn name(&self) -> &'static str {
        match *self {
            Style::Thin => "Thin",
            Style::ThinItalic => "Thin Italic",
            Style::Light => "Light",
            Style::LightItalic => "Light Italic",
            Style::Regular => "Regular",
            Style::Italic => "Italic",
            Style::Medium => "Medium",
            Style::MediumItalic => "Medium Italic",
            Style::Bold => "Bold",
            Style::BoldItalic => "Bold Italic",
            Style::Black => "Black",
            Style::BlackItalic => "Black Italic",
        }
    }

    /// True for Regular, Bold, Italic and Bold Italic.
    pub fn is_ribbi(&self) -> bool {
        RIBBI_STYLE_NAMES.contains(&self.name())
    }

    pub fn is_italic(&self) -> bool {
        self.name().ends_with("Italic")
    }

    /// The first word of the subfamily name ("Italic" for plain italic).
    pub fn weight(&self) -> &'static str {
        self.name().split_whitespace().next().unwrap_or_default()
    }

    /// OS/2 usWeightClass for this style.
    pub fn weight_class(&self) -> u16 {
        match *self {
            Style::Thin | Style::ThinItalic => 100,
            Style::Light | Style::LightItalic => 300,
            Style::Regular | Style::Italic => 400,
            Style::Medium | Style::MediumItalic => 500,
            Style::Bold | Style::BoldItalic => 700,
            Style::Black | Style::BlackItalic => 900,
        }
    }
}

impl FromStr for Style {
    type Err = TouchupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .iter()
            .find(|style| style.name() == s)
            .copied()
            .ok_or_else(|| TouchupError::UnknownStyle { name: s.to_string() })
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
