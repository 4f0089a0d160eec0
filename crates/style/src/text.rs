use crate::font::{FontFace, FontStyle, FontWeight};
use kneeboard_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Right,
    Center,
}

/// The complete font state a string is measured and painted with.
///
/// Width queries and paint calls must agree on this exact state; the
/// proportional Helvetica faces yield different advances per weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in points. All coordinates are millimeters, but sizes stay
    /// in points the way print specifications quote them.
    pub size: f32,
    pub weight: FontWeight,
    pub style: FontStyle,
    pub color: Color,
}

/// Point-to-millimeter conversion (25.4 / 72).
pub const PT_TO_MM: f32 = 0.352_777_8;

impl TextStyle {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
            style: FontStyle::Normal,
            color: Color::gray(40),
        }
    }

    pub fn bold(size: f32) -> Self {
        Self {
            weight: FontWeight::Bold,
            ..Self::new(size)
        }
    }

    pub fn italic(size: f32) -> Self {
        Self {
            style: FontStyle::Italic,
            ..Self::new(size)
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn face(&self) -> FontFace {
        FontFace::resolve(self.weight, self.style)
    }

    /// Line advance in millimeters (1.2 em leading).
    pub fn line_height(&self) -> f32 {
        self.size * PT_TO_MM * 1.2
    }
}
