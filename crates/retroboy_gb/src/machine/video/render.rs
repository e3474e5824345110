use super::palette::Palette;
use super::{VideoUnit, BG_MAP_SIZE, TILE_COUNT, TILE_SHEET_HEIGHT, TILE_SHEET_WIDTH};
use crate::{BYTES_PER_PIXEL, SCREEN_WIDTH};

/// Sprite attribute bits (OAM byte 3).
pub(super) const ATTR_PRIORITY: u8 = 1 << 7;
pub(super) const ATTR_FLIP_Y: u8 = 1 << 6;
pub(super) const ATTR_FLIP_X: u8 = 1 << 5;
pub(super) const ATTR_PALETTE: u8 = 1 << 4;

#[inline]
fn put_pixel(buffer: &mut [u8], index: usize, rgba: [u8; 4]) {
    let start = index * BYTES_PER_PIXEL;
    buffer[start..start + BYTES_PER_PIXEL].copy_from_slice(&rgba);
}

impl VideoUnit {
    /// Decode the two bytes of one tile row starting at the even VRAM
    /// `offset` into eight color indices.
    pub(super) fn decode_tile_row(&mut self, offset: usize) {
        let lo = self.vram[offset];
        let hi = self.vram[offset + 1];
        let tile = offset >> 4;
        let row = (offset >> 1) & 7;
        let base = tile * 64 + row * 8;
        for x in 0..8 {
            let bit = 7 - x;
            self.tiles[base + x] = ((lo >> bit) & 1) | (((hi >> bit) & 1) << 1);
        }
    }

    /// Color index of pixel (x, y) inside a 256x256 tile map.
    #[inline]
    fn map_pixel(&self, map_offset: usize, x: u8, y: u8) -> u8 {
        let entry = map_offset + usize::from(y >> 3) * 32 + usize::from(x >> 3);
        let tile = self.lcdc.bg_tile_index(self.vram[entry]);
        self.tiles[tile * 64 + usize::from(y & 7) * 8 + usize::from(x & 7)]
    }

    /// Compose line LY of the back buffer: background, then window, then
    /// sprites.
    pub(super) fn render_scanline(&mut self) {
        let ly = self.ly;
        let row_start = usize::from(ly) * SCREEN_WIDTH;

        if self.lcdc.bg_enabled {
            let map = self.lcdc.bg_map_offset();
            let y = ly.wrapping_add(self.scy);
            for col in 0..SCREEN_WIDTH {
                let x = (col as u8).wrapping_add(self.scx);
                let index = self.map_pixel(map, x, y);
                self.line_bg[col] = index;
                put_pixel(&mut self.back, row_start + col, self.bgp.color(index).rgba());
            }
        } else {
            let rgba = self.bgp.color(0).rgba();
            for col in 0..SCREEN_WIDTH {
                self.line_bg[col] = 0;
                put_pixel(&mut self.back, row_start + col, rgba);
            }
        }

        if self.lcdc.window_enabled && ly >= self.wy {
            let map = self.lcdc.window_map_offset();
            let y = ly - self.wy;
            let left = i32::from(self.wx) - 7;
            for col in left.max(0)..SCREEN_WIDTH as i32 {
                let x = (col - left) as u8;
                let index = self.map_pixel(map, x, y);
                let col = col as usize;
                self.line_bg[col] = index;
                put_pixel(&mut self.back, row_start + col, self.bgp.color(index).rgba());
            }
        }

        if self.lcdc.sprites_enabled {
            self.render_sprites(ly, row_start);
        }
    }

    /// Draw every sprite covering this line. Entries are visited from the
    /// end of OAM so lower-indexed sprites overwrite higher ones.
    fn render_sprites(&mut self, ly: u8, row_start: usize) {
        let height = i32::from(self.lcdc.sprite_height());
        let line = i32::from(ly);

        for entry in self.oam.chunks_exact(4).rev() {
            let top = i32::from(entry[0]) - 16;
            let left = i32::from(entry[1]) - 8;
            if line < top || line >= top + height {
                continue;
            }

            let attrs = entry[3];
            let mut tile = usize::from(entry[2]);
            if height == 16 {
                tile &= 0xFE;
            }
            let mut row = (line - top) as usize;
            if attrs & ATTR_FLIP_Y != 0 {
                row = height as usize - 1 - row;
            }
            let palette: Palette = if attrs & ATTR_PALETTE != 0 {
                self.obp1
            } else {
                self.obp0
            };

            for px in 0..8 {
                let col = left + px;
                if !(0..SCREEN_WIDTH as i32).contains(&col) {
                    continue;
                }
                let col = col as usize;
                let sx = if attrs & ATTR_FLIP_X != 0 { 7 - px } else { px };
                let sx = sx as usize;
                let index = self.tiles[tile * 64 + row * 8 + sx];
                if index == 0 {
                    continue;
                }
                if attrs & ATTR_PRIORITY != 0 && self.line_bg[col] != 0 {
                    continue;
                }
                put_pixel(&mut self.back, row_start + col, palette.color(index).rgba());
            }
        }
    }

    /// Refresh the tile sheet (16x24 tiles) and the full background map
    /// composite using the current BGP.
    pub(super) fn rebuild_debug_views(&mut self) {
        for y in 0..TILE_SHEET_HEIGHT {
            for x in 0..TILE_SHEET_WIDTH {
                let tile = (y / 8) * 16 + x / 8;
                debug_assert!(tile < TILE_COUNT);
                let index = self.tiles[tile * 64 + (y & 7) * 8 + (x & 7)];
                put_pixel(
                    &mut self.tile_sheet,
                    y * TILE_SHEET_WIDTH + x,
                    self.bgp.color(index).rgba(),
                );
            }
        }

        let map = self.lcdc.bg_map_offset();
        for y in 0..BG_MAP_SIZE {
            for x in 0..BG_MAP_SIZE {
                let index = self.map_pixel(map, x as u8, y as u8);
                put_pixel(&mut self.bg_map, y * BG_MAP_SIZE + x, self.bgp.color(index).rgba());
            }
        }
    }
}
