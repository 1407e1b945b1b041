//! Random colors and RGB/HSL conversion

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::source::UniformSource;

/// Output format for generated colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    #[default]
    Hex,
    Rgb,
    Hsl,
}

impl ColorFormat {
    /// Resolve a format name; unknown names fall back to `Hex`
    pub fn from_name(name: &str) -> Self {
        match name {
            "hex" => Self::Hex,
            "rgb" => Self::Rgb,
            "hsl" => Self::Hsl,
            other => {
                log::warn!("Unknown color format '{}', using hex", other);
                Self::Hex
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
        }
    }
}

/// 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels drawn in r, g, b order
    pub fn random<S: UniformSource + ?Sized>(source: &mut S) -> Self {
        let r = source.byte();
        let g = source.byte();
        let b = source.byte();
        Self { r, g, b }
    }

    /// `#rrggbb`, lowercase
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_hsl(&self) -> Hsl {
        rgb_to_hsl(*self)
    }

    pub fn format(&self, format: ColorFormat) -> String {
        match format {
            ColorFormat::Hex => self.to_hex(),
            ColorFormat::Rgb => self.to_string(),
            ColorFormat::Hsl => self.to_hsl().to_string(),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Integer HSL: hue in `[0, 360)`, saturation and lightness in `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// RGB to HSL with every component truncated toward zero
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        ((h / 6.0).rem_euclid(1.0), s)
    };

    Hsl {
        h: ((h * 360.0) as u16).min(359),
        s: (s * 100.0) as u8,
        l: (l * 100.0) as u8,
    }
}

/// HSL to RGB, channels rounded to nearest
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = f64::from(hsl.h % 360) / 360.0;
    let s = f64::from(hsl.s.min(100)) / 100.0;
    let l = f64::from(hsl.l.min(100)) / 100.0;

    if s == 0.0 {
        let v = channel(l);
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::new(
        channel(hue_to_component(p, q, h + 1.0 / 3.0)),
        channel(hue_to_component(p, q, h)),
        channel(hue_to_component(p, q, h - 1.0 / 3.0)),
    )
}

fn hue_to_component(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Generate `count` random colors rendered in `format`
pub fn generate_colors<S: UniformSource + ?Sized>(
    source: &mut S,
    format: ColorFormat,
    count: usize,
) -> Vec<String> {
    log::debug!("Generating {} {} colors", count, format.name());
    (0..count).map(|_| Rgb::random(source).format(format)).collect()
}
