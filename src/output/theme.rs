//! Tile colours
//!
//! The core only knows `Correct`, `Present` and `Absent`; colours are picked
//! here from the player's preferences.

use crate::core::LetterFeedback;
use crate::stats::Preferences;
use colored::{ColoredString, Colorize, CustomColor};

const GREEN: CustomColor = CustomColor { r: 0x6a, g: 0xaa, b: 0x64 };
const YELLOW: CustomColor = CustomColor { r: 0xc9, g: 0xb4, b: 0x58 };
const ORANGE: CustomColor = CustomColor { r: 0xf5, g: 0x79, b: 0x3a };
const BLUE: CustomColor = CustomColor { r: 0x85, g: 0xc0, b: 0xf9 };
const GREY: CustomColor = CustomColor { r: 0x78, g: 0x7c, b: 0x7e };
const DARK_GREY: CustomColor = CustomColor { r: 0x3a, g: 0x3a, b: 0x3c };

/// Colour scheme derived from preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Theme {
    pub dark_mode: bool,
    pub high_contrast: bool,
}

impl From<Preferences> for Theme {
    fn from(prefs: Preferences) -> Self {
        Self {
            dark_mode: prefs.dark_mode,
            high_contrast: prefs.high_contrast,
        }
    }
}

impl Theme {
    #[must_use]
    pub const fn color(self, mark: LetterFeedback) -> CustomColor {
        match (mark, self.high_contrast) {
            (LetterFeedback::Correct, false) => GREEN,
            (LetterFeedback::Correct, true) => ORANGE,
            (LetterFeedback::Present, false) => YELLOW,
            (LetterFeedback::Present, true) => BLUE,
            (LetterFeedback::Absent, _) if self.dark_mode => DARK_GREY,
            (LetterFeedback::Absent, _) => GREY,
        }
    }

    /// One letter as a coloured tile
    #[must_use]
    pub fn tile(self, letter: u8, mark: LetterFeedback) -> ColoredString {
        format!(" {} ", char::from(letter).to_ascii_uppercase())
            .white()
            .bold()
            .on_custom_color(self.color(mark))
    }

    /// Square emoji for sharing results
    #[must_use]
    pub const fn emoji(self, mark: LetterFeedback) -> char {
        match (mark, self.high_contrast) {
            (LetterFeedback::Correct, false) => '🟩',
            (LetterFeedback::Correct, true) => '🟧',
            (LetterFeedback::Present, false) => '🟨',
            (LetterFeedback::Present, true) => '🟦',
            (LetterFeedback::Absent, _) if self.dark_mode => '⬛',
            (LetterFeedback::Absent, _) => '⬜',
        }
    }

    /// Colour for the largest histogram bar
    #[must_use]
    pub const fn highlight(self) -> CustomColor {
        self.color(LetterFeedback::Correct)
    }
}
