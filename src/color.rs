use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Relative luminance on a 0-1 scale, standard weighted formula.
    pub fn luminance(&self) -> f64 {
        (0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64) / 255.0
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

/// Precomputed cell colors. Null cells carry no style at all; the
/// renderer shows them transparent with a "-" placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellStyle {
    pub background: Rgb,
    pub foreground: Rgb,
}

// Three-stop diverging red -> yellow -> green ramp (RdYlGn endpoints).
const SCALE_LOW: Rgb = Rgb {
    r: 0xa5,
    g: 0x00,
    b: 0x26,
};
const SCALE_MID: Rgb = Rgb {
    r: 0xff,
    g: 0xff,
    b: 0xbf,
};
const SCALE_HIGH: Rgb = Rgb {
    r: 0x00,
    g: 0x68,
    b: 0x37,
};

/// Diverging color scale over the current visible value domain.
/// Rebuilt per render; the domain shifts with the active filter and
/// sort context, so instances are never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    min: f64,
    mid: f64,
    max: f64,
}

impl ColorScale {
    /// Domain from the non-null values of one column; an empty column
    /// falls back to the full 0-100 score range.
    pub fn from_values(values: &[f64]) -> Self {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let (min, max) = if values.is_empty() {
            (0.0, 100.0)
        } else {
            (min, max)
        };
        Self {
            min,
            mid: min + (max - min) / 2.0,
            max,
        }
    }

    pub fn color_of(&self, value: f64) -> Rgb {
        // Degenerate zero-width domain pins everything to the green end.
        if self.max <= self.min {
            return SCALE_HIGH;
        }
        if value <= self.mid {
            let t = clamp01((value - self.min) / (self.mid - self.min));
            lerp(SCALE_LOW, SCALE_MID, t)
        } else {
            let t = clamp01((value - self.mid) / (self.max - self.mid));
            lerp(SCALE_MID, SCALE_HIGH, t)
        }
    }

    pub fn foreground_of(&self, value: f64) -> Rgb {
        if self.color_of(value).luminance() > 0.5 {
            Rgb::BLACK
        } else {
            Rgb::WHITE
        }
    }

    pub fn style_of(&self, value: Option<f64>) -> Option<CellStyle> {
        value.map(|v| CellStyle {
            background: self.color_of(v),
            foreground: self.foreground_of(v),
        })
    }
}

fn clamp01(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let ch = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
    Rgb {
        r: ch(a.r, b.r),
        g: ch(a.g, b.g),
        b: ch(a.b, b.b),
    }
}

pub const BADGE_GREEN: Rgb = Rgb {
    r: 0x19,
    g: 0x87,
    b: 0x54,
};
pub const BADGE_YELLOW: Rgb = Rgb {
    r: 0xff,
    g: 0xc1,
    b: 0x07,
};
pub const BADGE_RED: Rgb = Rgb {
    r: 0xdc,
    g: 0x35,
    b: 0x45,
};

/// Fixed-threshold badge palette: green at >= 70% of the metric's
/// weight, yellow at >= 50%, red below.
pub fn badge_color(score: f64, max: f64) -> Rgb {
    let pct = if max > 0.0 { score / max } else { 0.0 };
    if pct >= 0.7 {
        BADGE_GREEN
    } else if pct >= 0.5 {
        BADGE_YELLOW
    } else {
        BADGE_RED
    }
}

pub fn badge_style(score: f64, max: f64) -> CellStyle {
    let background = badge_color(score, max);
    let foreground = if background == BADGE_YELLOW {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    };
    CellStyle {
        background,
        foreground,
    }
}
