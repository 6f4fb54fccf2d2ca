//! How a body looks while its texture is loading, once loaded, or after it failed.

use serde::{Deserialize, Serialize};

/// 8-bit sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const WHITE: Rgb = Rgb([255, 255, 255]);

    /// From a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Rgb([(hex >> 16) as u8, (hex >> 8) as u8, hex as u8])
    }

    pub fn r(self) -> u8 {
        self.0[0]
    }

    pub fn g(self) -> u8 {
        self.0[1]
    }

    pub fn b(self) -> u8 {
        self.0[2]
    }

    /// From HSL components, all in `[0, 1]`.
    pub fn from_hsl(h: f32, s: f32, l: f32) -> Self {
        let h = h.rem_euclid(1.0);
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h6 = h * 6.0;
        let x = c * (1.0 - (h6 % 2.0 - 1.0).abs());
        let (r, g, b) = match h6 as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = l - c / 2.0;
        let to_u8 = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb([to_u8(r), to_u8(g), to_u8(b)])
    }

    /// Components scaled to `[0, 1]`.
    pub fn to_f32(self) -> [f32; 3] {
        self.0.map(|c| c as f32 / 255.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    /// Texture requested but not back yet. Drawn with the fallback colour.
    Pending { fallback: Rgb },
    /// Texture loaded; `tint` is its mean colour.
    Textured { tint: Rgb },
    /// Texture failed to load or the body has none.
    Fallback { colour: Rgb },
}

impl Appearance {
    /// Colour to draw with right now.
    pub fn colour(&self) -> Rgb {
        match *self {
            Appearance::Pending { fallback } => fallback,
            Appearance::Textured { tint } => tint,
            Appearance::Fallback { colour } => colour,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Appearance::Pending { .. })
    }

    /// Settle a pending appearance with the outcome of its texture load.
    ///
    /// Already-settled appearances are left as they are.
    pub fn resolve<E: std::fmt::Display>(&mut self, outcome: Result<Rgb, E>) -> Result<(), E> {
        let Appearance::Pending { fallback } = *self else {
            return Ok(());
        };
        match outcome {
            Ok(tint) => {
                *self = Appearance::Textured { tint };
                Ok(())
            }
            Err(err) => {
                *self = Appearance::Fallback { colour: fallback };
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgb::from_hex(0x4a90e2), Rgb([0x4a, 0x90, 0xe2]));
    }

    #[test]
    fn test_from_hsl() {
        assert_eq!(Rgb::from_hsl(0.0, 1.0, 0.5), Rgb([255, 0, 0]));
        assert_eq!(Rgb::from_hsl(0.0, 0.0, 1.0), Rgb::WHITE);
        // Asteroid brown
        let brown = Rgb::from_hsl(0.1, 0.3, 0.3);
        assert!(brown.r() > brown.g() && brown.g() > brown.b());
    }

    #[test]
    fn test_pending_uses_fallback() {
        let appearance = Appearance::Pending {
            fallback: Rgb::from_hex(0xcd5c5c),
        };
        assert!(appearance.is_pending());
        assert_eq!(appearance.colour(), Rgb::from_hex(0xcd5c5c));
    }

    #[test]
    fn test_resolve_success_and_failure() {
        let fallback = Rgb::from_hex(0x8c7853);

        let mut ok = Appearance::Pending { fallback };
        ok.resolve::<String>(Ok(Rgb([10, 20, 30]))).unwrap();
        assert_eq!(ok, Appearance::Textured { tint: Rgb([10, 20, 30]) });

        let mut failed = Appearance::Pending { fallback };
        assert!(failed.resolve(Err("404")).is_err());
        assert_eq!(failed, Appearance::Fallback { colour: fallback });
    }

    #[test]
    fn test_resolve_only_once() {
        let mut appearance = Appearance::Textured { tint: Rgb::WHITE };
        appearance.resolve::<String>(Ok(Rgb([0, 0, 0]))).unwrap();
        assert_eq!(appearance.colour(), Rgb::WHITE);
    }
}
