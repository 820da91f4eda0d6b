use crate::foundation::math::Rng64;

pub use kurbo::{Point, Rect, Vec2};

/// Target pixel dimensions of the animation surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// An RGB color whose channels are always in `[0, 255]`.
///
/// Constructors clamp, so no operation can ever store an out-of-range
/// channel; the `u8` fields make the invariant structural.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Build a color from arbitrary integers, clamping each channel into
    /// `[0, 255]`.
    pub fn new(r: i64, g: i64, b: i64) -> Self {
        Self {
            r: clamp_channel(r as f64),
            g: clamp_channel(g as f64),
            b: clamp_channel(b as f64),
        }
    }

    /// Build a color from channels already known to be in range.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Hexadecimal `#rrggbb` representation.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Random per-channel walk of up to `percent`% of the channel range in
    /// either direction.
    ///
    /// The walk is always re-sampled from `rng`, so `varied(rng, 0.0)`
    /// consumes randomness but returns a value exactly equal to `self`.
    pub fn varied(self, rng: &mut Rng64, percent: f64) -> Self {
        let amount = percent / 100.0 * 255.0;
        Self {
            r: clamp_channel(f64::from(self.r) + rng.next_symmetric(amount)),
            g: clamp_channel(f64::from(self.g) + rng.next_symmetric(amount)),
            b: clamp_channel(f64::from(self.b) + rng.next_symmetric(amount)),
        }
    }

    /// Weighted average toward a base tint:
    /// `(channel + base_channel * opacity) / (1 + opacity)` per channel.
    pub fn tinted(self, base: Color, opacity: f64) -> Self {
        let mix = |c: u8, b: u8| {
            clamp_channel((f64::from(c) + f64::from(b) * opacity) / (1.0 + opacity))
        };
        Self {
            r: mix(self.r, base.r),
            g: mix(self.g, base.g),
            b: mix(self.b, base.b),
        }
    }
}

fn clamp_channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
