// File: crates/sparkline-core/src/color.rs
// Summary: Hex color parsing and the two-outcome tooltip contrast decision.

use std::fmt;

/// 8-bit RGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const DARK_GRAY: Rgb = Rgb::new(0x33, 0x33, 0x33);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB`.
    ///
    /// Channels that fail to parse count as 0; an input of any other length is
    /// treated as entirely unparsed (black).
    pub fn parse_lossy(input: &str) -> Self {
        let hex = input.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let channel = |s: &str| {
            if s.bytes().all(|b| b.is_ascii_hexdigit()) { u8::from_str_radix(s, 16).ok() } else { None }
        };
        let parsed = match hex.len() {
            6 if hex.is_ascii() => [channel(&hex[0..2]), channel(&hex[2..4]), channel(&hex[4..6])],
            3 if hex.is_ascii() => {
                let dup = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
                [dup(0), dup(1), dup(2)]
            }
            _ => [None, None, None],
        };
        if parsed.iter().any(Option::is_none) {
            tracing::warn!(color = input, "malformed color; unparsed channels treated as 0");
        }
        let [r, g, b] = parsed.map(|c| c.unwrap_or(0));
        Self { r, g, b }
    }

    /// Weighted luminance in `[0, 1]`.
    pub fn luminance(&self) -> f64 {
        (0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64) / 255.0
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Tooltip text and box colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorPair {
    pub foreground: Rgb,
    pub background: Rgb,
}

impl ColorPair {
    pub const DARK_ON_LIGHT: ColorPair = ColorPair { foreground: Rgb::BLACK, background: Rgb::WHITE };
    pub const LIGHT_ON_DARK: ColorPair = ColorPair { foreground: Rgb::WHITE, background: Rgb::DARK_GRAY };
}

/// Pick a readable tooltip pair for `background`: dark-on-light above
/// luminance 0.5, light-on-dark otherwise.
pub fn resolve(background: &str) -> ColorPair {
    if Rgb::parse_lossy(background).luminance() > 0.5 {
        ColorPair::DARK_ON_LIGHT
    } else {
        ColorPair::LIGHT_ON_DARK
    }
}
