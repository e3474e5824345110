/// LCDC (0xFF40) decoded into its individual switches.
///
/// The byte is never stored as-is: a write replaces every field at once and
/// a read packs them back together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Lcdc {
    pub(crate) display_enabled: bool,
    /// Window tile map at 0x9C00 instead of 0x9800.
    pub(crate) window_map_high: bool,
    pub(crate) window_enabled: bool,
    /// Tile data at 0x8000 with unsigned indices instead of 0x8800 signed.
    pub(crate) unsigned_tile_data: bool,
    /// Background tile map at 0x9C00 instead of 0x9800.
    pub(crate) bg_map_high: bool,
    /// 8x16 sprites.
    pub(crate) tall_sprites: bool,
    pub(crate) sprites_enabled: bool,
    pub(crate) bg_enabled: bool,
}

impl From<u8> for Lcdc {
    fn from(value: u8) -> Self {
        let bit = |n: u8| value & (1 << n) != 0;
        Self {
            display_enabled: bit(7),
            window_map_high: bit(6),
            window_enabled: bit(5),
            unsigned_tile_data: bit(4),
            bg_map_high: bit(3),
            tall_sprites: bit(2),
            sprites_enabled: bit(1),
            bg_enabled: bit(0),
        }
    }
}

impl From<Lcdc> for u8 {
    fn from(lcdc: Lcdc) -> u8 {
        [
            lcdc.bg_enabled,
            lcdc.sprites_enabled,
            lcdc.tall_sprites,
            lcdc.bg_map_high,
            lcdc.unsigned_tile_data,
            lcdc.window_enabled,
            lcdc.window_map_high,
            lcdc.display_enabled,
        ]
        .iter()
        .enumerate()
        .fold(0, |acc, (n, &set)| acc | (u8::from(set) << n))
    }
}

impl Lcdc {
    /// VRAM offset of the background tile map.
    #[inline]
    pub(crate) fn bg_map_offset(&self) -> usize {
        if self.bg_map_high {
            0x1C00
        } else {
            0x1800
        }
    }

    #[inline]
    pub(crate) fn window_map_offset(&self) -> usize {
        if self.window_map_high {
            0x1C00
        } else {
            0x1800
        }
    }

    /// Tile-cache index for a map entry under the current addressing mode.
    /// Signed mode places tiles 0..=127 at 256..=383.
    #[inline]
    pub(crate) fn bg_tile_index(&self, tile: u8) -> usize {
        if self.unsigned_tile_data || tile > 127 {
            usize::from(tile)
        } else {
            usize::from(tile) + 256
        }
    }

    #[inline]
    pub(crate) fn sprite_height(&self) -> u8 {
        if self.tall_sprites {
            16
        } else {
            8
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_0x91() {
        let lcdc = Lcdc::from(0x91);
        assert!(lcdc.display_enabled);
        assert!(lcdc.unsigned_tile_data);
        assert!(lcdc.bg_enabled);
        assert!(!lcdc.window_enabled);
        assert!(!lcdc.sprites_enabled);
        assert_eq!(lcdc.bg_map_offset(), 0x1800);
        assert_eq!(u8::from(lcdc), 0x91);
    }

    #[test]
    fn signed_addressing_offsets_low_tiles() {
        let lcdc = Lcdc::from(0x81);
        assert_eq!(lcdc.bg_tile_index(0), 256);
        assert_eq!(lcdc.bg_tile_index(127), 383);
        assert_eq!(lcdc.bg_tile_index(128), 128);
        let lcdc = Lcdc::from(0x91);
        assert_eq!(lcdc.bg_tile_index(5), 5);
    }
}
