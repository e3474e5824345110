/// An RGBA color as written into every pixel buffer the core produces.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::new_rgb(0xFF, 0xFF, 0xFF);

    #[inline]
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 0xFF }
    }

    #[inline]
    pub const fn new_rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    #[inline]
    pub const fn rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// One of BGP/OBP0/OBP1: a raw register byte and the colors it selects.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Palette {
    raw: u8,
    colors: [Color; 4],
}

impl Palette {
    pub(crate) fn new(raw: u8, shades: &[Color; 4]) -> Self {
        let mut palette = Self {
            raw: 0,
            colors: [Color::WHITE; 4],
        };
        palette.set(raw, shades);
        palette
    }

    #[inline]
    pub(crate) fn raw(&self) -> u8 {
        self.raw
    }

    /// Decode a register write: entry `i` takes shade `(raw >> 2i) & 3`.
    pub(crate) fn set(&mut self, raw: u8, shades: &[Color; 4]) {
        self.raw = raw;
        for (i, color) in self.colors.iter_mut().enumerate() {
            *color = shades[usize::from((raw >> (i * 2)) & 0x03)];
        }
    }

    #[inline]
    pub(crate) fn color(&self, index: u8) -> Color {
        self.colors[usize::from(index & 0x03)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DMG_GREEN_PALETTE;

    #[test]
    fn bgp_fc_maps_index_zero_to_lightest() {
        let palette = Palette::new(0xFC, &DMG_GREEN_PALETTE);
        assert_eq!(palette.raw(), 0xFC);
        assert_eq!(palette.color(0), DMG_GREEN_PALETTE[0]);
        assert_eq!(palette.color(1), DMG_GREEN_PALETTE[3]);
        assert_eq!(palette.color(3), DMG_GREEN_PALETTE[3]);
    }

    #[test]
    fn identity_palette() {
        let palette = Palette::new(0xE4, &DMG_GREEN_PALETTE);
        for i in 0..4 {
            assert_eq!(palette.color(i), DMG_GREEN_PALETTE[i as usize]);
        }
    }
}
