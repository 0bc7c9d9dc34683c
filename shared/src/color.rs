use std::fmt;

use serde::{Deserialize, Serialize};

/// An RGBA colour, rendered as a CSS `rgba(...)` string.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Color {
        Color { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Color {
        Color::new(r, g, b, 1.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Translucent warm tones the particles are drawn in.
pub const WARM_PALETTE: [Color; 5] = [
    Color::new(212, 175, 55, 0.8),
    Color::new(240, 217, 133, 0.6),
    Color::new(218, 165, 32, 0.4),
    Color::new(184, 134, 11, 0.7),
    Color::new(255, 215, 0, 0.5),
];

/// `#fffdf7`, painted over the whole surface every frame.
pub const PAPER: Color = Color::opaque(255, 253, 247);

/// `amber-400` at 10%, the ripple ring stroke.
pub const AMBER_RING: Color = Color::new(251, 191, 36, 0.1);
