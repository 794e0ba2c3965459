use serde::{Deserialize, Serialize};
use write_fonts::tables::os2::Os2;

/// The vertical metrics written into the OS/2 table.
///
/// The defaults are the legacy values shared by the whole web family,
/// independent of the glyph extents of any one font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerticalMetrics {
    pub typo_ascender: i16,
    pub typo_descender: i16,
    pub typo_line_gap: i16,
    pub win_ascent: u16,
    pub win_descent: u16,
}

impl Default for VerticalMetrics {
    fn default() -> Self {
        VerticalMetrics {
            typo_ascender: 1536,
            typo_descender: -512,
            typo_line_gap: 102,
            win_ascent: 1946,
            win_descent: 512,
        }
    }
}

impl VerticalMetrics {
    pub fn apply(&self, os2: &mut Os2) {
        os2.s_typo_ascender = self.typo_ascender;
        os2.s_typo_descender = self.typo_descender;
        os2.s_typo_line_gap = self.typo_line_gap;
        os2.us_win_ascent = self.win_ascent;
        os2.us_win_descent = self.win_descent;
    }

    pub fn of(os2: &Os2) -> Self {
        VerticalMetrics {
            typo_ascender: os2.s_typo_ascender,
            typo_descender: os2.s_typo_descender,
            typo_line_gap: os2.s_typo_line_gap,
            win_ascent: os2.us_win_ascent,
            win_descent: os2.us_win_descent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrites_whatever_was_there() {
        let mut os2 = Os2 {
            s_typo_ascender: 2146,
            s_typo_descender: -555,
            s_typo_line_gap: 0,
            us_win_ascent: 2146,
            us_win_descent: 555,
            ..Default::default()
        };
        let metrics = VerticalMetrics::default();
        metrics.apply(&mut os2);
        assert_eq!(VerticalMetrics::of(&os2), metrics);
        metrics.apply(&mut os2);
        assert_eq!(VerticalMetrics::of(&os2), metrics);
        assert_eq!(os2.s_typo_descender, -512);
        assert_eq!(os2.us_win_ascent, 1946);
    }
}
