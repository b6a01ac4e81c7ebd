use std::fmt;

/// An opaque 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// ---------------------------------------------------------------------------
// Icon palette
// ---------------------------------------------------------------------------

/// Indigo canvas fill.
pub const BACKGROUND: Rgb = Rgb::from_hex(0x4f46e5);
/// Notebook page.
pub const PAPER: Rgb = Rgb::from_hex(0xfffde7);
/// Red vertical margin rule.
pub const MARGIN_RULE: Rgb = Rgb::from_hex(0xf87171);
/// Blue horizontal ruling.
pub const RULED_LINE: Rgb = Rgb::from_hex(0xa5b4fc);
/// Fill and outline of the glyph diamond. Same indigo as the background.
pub const GLYPH: Rgb = Rgb::from_hex(0x4f46e5);
pub const WHITE: Rgb = Rgb::from_hex(0xffffff);
