mod lcdc;
mod palette;
mod render;

pub use self::palette::Color;

use self::lcdc::Lcdc;
use self::palette::Palette;
use super::interrupts::{InterruptController, InterruptFlags};
use crate::{BYTES_PER_PIXEL, SCREEN_HEIGHT, SCREEN_WIDTH};

const OAM_SCAN_CYCLES: u32 = 80;
const DRAWING_CYCLES: u32 = 172;
const HBLANK_CYCLES: u32 = 204;
const LINE_CYCLES: u32 = 456;
const VBLANK_FIRST_LINE: u8 = 144;
const LAST_LINE: u8 = 153;

pub(crate) const VRAM_SIZE: usize = 0x2000;
pub(crate) const OAM_SIZE: usize = 0xA0;
/// 384 tiles of 8x8 decoded color indices.
const TILE_COUNT: usize = 384;

pub(crate) const TILE_SHEET_WIDTH: usize = 128;
pub(crate) const TILE_SHEET_HEIGHT: usize = 192;
pub(crate) const BG_MAP_SIZE: usize = 256;

/// LCD controller mode, as reported in STAT bits 0..=1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    HBlank = 0,
    VBlank = 1,
    OamScan = 2,
    Drawing = 3,
}

/// STAT bits that select interrupt sources.
const STAT_HBLANK_IRQ: u8 = 1 << 3;
const STAT_VBLANK_IRQ: u8 = 1 << 4;
const STAT_OAM_IRQ: u8 = 1 << 5;
const STAT_LYC_IRQ: u8 = 1 << 6;
const STAT_LYC_MATCH: u8 = 1 << 2;

/// Video unit: VRAM/OAM owner, per-line mode state machine and scanline
/// compositor.
pub(crate) struct VideoUnit {
    vram: Box<[u8; VRAM_SIZE]>,
    oam: [u8; OAM_SIZE],
    /// Decoded 2-bit color indices, 64 per tile, refreshed on every write
    /// to the tile data area.
    tiles: Box<[u8; TILE_COUNT * 64]>,

    mode: Mode,
    clock: u32,
    ly: u8,
    lyc: u8,
    /// STAT bits 2..=6; bits 0..=1 mirror `mode`.
    stat: u8,
    lcdc: Lcdc,
    scy: u8,
    scx: u8,
    wy: u8,
    wx: u8,
    bgp: Palette,
    obp0: Palette,
    obp1: Palette,
    shades: [Color; 4],

    /// Background color index per column of the line being composed.
    line_bg: [u8; SCREEN_WIDTH],
    /// Frame being composed; swapped into `front` on entering VBlank.
    back: Vec<u8>,
    front: Vec<u8>,
    tile_sheet: Vec<u8>,
    bg_map: Vec<u8>,
}

impl VideoUnit {
    pub(crate) fn new(shades: [Color; 4]) -> Self {
        let mut video = Self {
            vram: Box::new([0; VRAM_SIZE]),
            oam: [0; OAM_SIZE],
            tiles: Box::new([0; TILE_COUNT * 64]),
            mode: Mode::OamScan,
            clock: 0,
            ly: 0,
            lyc: 0,
            stat: 0,
            lcdc: Lcdc::default(),
            scy: 0,
            scx: 0,
            wy: 0,
            wx: 0,
            bgp: Palette::new(0, &shades),
            obp0: Palette::new(0, &shades),
            obp1: Palette::new(0, &shades),
            shades,
            line_bg: [0; SCREEN_WIDTH],
            back: vec![0; SCREEN_WIDTH * SCREEN_HEIGHT * BYTES_PER_PIXEL],
            front: vec![0; SCREEN_WIDTH * SCREEN_HEIGHT * BYTES_PER_PIXEL],
            tile_sheet: vec![0; TILE_SHEET_WIDTH * TILE_SHEET_HEIGHT * BYTES_PER_PIXEL],
            bg_map: vec![0; BG_MAP_SIZE * BG_MAP_SIZE * BYTES_PER_PIXEL],
        };
        video.reset();
        video
    }

    /// Post-boot register state: LCD on (0x91), BGP 0xFC, blank memory.
    pub(crate) fn reset(&mut self) {
        self.vram.fill(0);
        self.oam.fill(0);
        self.tiles.fill(0);
        self.clock = 0;
        self.ly = 0;
        self.lyc = 0;
        self.stat = 0;
        self.lcdc = Lcdc::from(0x91);
        self.scy = 0;
        self.scx = 0;
        self.wy = 0;
        self.wx = 0;
        self.bgp.set(0xFC, &self.shades);
        self.obp0.set(0, &self.shades);
        self.obp1.set(0, &self.shades);
        self.line_bg.fill(0);
        self.set_mode(Mode::OamScan);
        self.whiten();
        self.tile_sheet.fill(0xFF);
        self.bg_map.fill(0xFF);
    }

    fn whiten(&mut self) {
        self.back.fill(0xFF);
        self.front.fill(0xFF);
    }

    /// Turning the LCD off parks the unit at the top of the frame.
    fn disable(&mut self) {
        self.set_mode(Mode::OamScan);
        self.stat &= !0x03;
        self.clock = 0;
        self.ly = 0;
        self.whiten();
        log::debug!("LCD disabled");
    }

    #[inline]
    pub(crate) fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub(crate) fn ly(&self) -> u8 {
        self.ly
    }

    #[inline]
    fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.stat = (self.stat & !0x03) | mode as u8;
    }

    /// Update the LY==LYC flag. While the match holds and STAT bit 6 is
    /// set, every call requests the STAT interrupt again.
    fn compare_ly(&mut self, interrupts: &mut InterruptController) {
        if self.ly == self.lyc {
            self.stat |= STAT_LYC_MATCH;
            if self.stat & STAT_LYC_IRQ != 0 {
                interrupts.request(InterruptFlags::LCD_STAT);
            }
        } else {
            self.stat &= !STAT_LYC_MATCH;
        }
    }

    /// Advance by `cycles` clock cycles. A single call may cross several
    /// mode boundaries.
    pub(crate) fn step(&mut self, cycles: u32, interrupts: &mut InterruptController) {
        if !self.lcdc.display_enabled {
            return;
        }

        self.compare_ly(interrupts);
        self.clock += cycles;

        loop {
            match self.mode {
                Mode::OamScan if self.clock >= OAM_SCAN_CYCLES => {
                    self.clock -= OAM_SCAN_CYCLES;
                    self.set_mode(Mode::Drawing);
                }
                Mode::Drawing if self.clock >= DRAWING_CYCLES => {
                    self.clock -= DRAWING_CYCLES;
                    self.render_scanline();
                    self.set_mode(Mode::HBlank);
                    if self.stat & STAT_HBLANK_IRQ != 0 {
                        interrupts.request(InterruptFlags::LCD_STAT);
                    }
                    if self.ly == VBLANK_FIRST_LINE - 1 {
                        self.rebuild_debug_views();
                    }
                }
                Mode::HBlank if self.clock >= HBLANK_CYCLES => {
                    self.clock -= HBLANK_CYCLES;
                    self.ly += 1;
                    if self.ly == VBLANK_FIRST_LINE {
                        self.enter_vblank(interrupts);
                    } else {
                        self.enter_oam_scan(interrupts);
                    }
                    self.compare_ly(interrupts);
                }
                Mode::VBlank if self.clock >= LINE_CYCLES => {
                    self.clock -= LINE_CYCLES;
                    self.ly += 1;
                    if self.ly > LAST_LINE {
                        self.ly = 0;
                        self.enter_oam_scan(interrupts);
                    }
                    self.compare_ly(interrupts);
                }
                _ => break,
            }
        }
    }

    fn enter_vblank(&mut self, interrupts: &mut InterruptController) {
        self.set_mode(Mode::VBlank);
        interrupts.request(InterruptFlags::VBLANK);
        if self.stat & STAT_VBLANK_IRQ != 0 {
            interrupts.request(InterruptFlags::LCD_STAT);
        }
        std::mem::swap(&mut self.front, &mut self.back);
    }

    fn enter_oam_scan(&mut self, interrupts: &mut InterruptController) {
        self.set_mode(Mode::OamScan);
        if self.stat & STAT_OAM_IRQ != 0 {
            interrupts.request(InterruptFlags::LCD_STAT);
        }
    }

    /// Last completed frame, RGBA, 160x144.
    #[inline]
    pub(crate) fn framebuffer(&self) -> &[u8] {
        &self.front
    }

    #[inline]
    pub(crate) fn tile_sheet(&self) -> &[u8] {
        &self.tile_sheet
    }

    #[inline]
    pub(crate) fn background_map(&self) -> &[u8] {
        &self.bg_map
    }

    /// Offset is relative to 0x8000.
    #[inline]
    pub(crate) fn read_vram(&self, offset: usize) -> u8 {
        self.vram[offset & (VRAM_SIZE - 1)]
    }

    /// Offset is relative to 0x8000. Tile data writes re-decode the
    /// affected row of the tile cache.
    pub(crate) fn write_vram(&mut self, offset: usize, value: u8) {
        let offset = offset & (VRAM_SIZE - 1);
        self.vram[offset] = value;
        if offset < 0x1800 {
            self.decode_tile_row(offset & !1);
        }
    }

    /// Offset is relative to 0xFE00.
    #[inline]
    pub(crate) fn read_oam(&self, offset: usize) -> u8 {
        self.oam.get(offset).copied().unwrap_or(0xFF)
    }

    #[inline]
    pub(crate) fn write_oam(&mut self, offset: usize, value: u8) {
        if let Some(byte) = self.oam.get_mut(offset) {
            *byte = value;
        }
    }

    pub(crate) fn read_register(&self, addr: u16) -> u8 {
        match addr {
            0xFF40 => u8::from(self.lcdc),
            0xFF41 => 0x80 | self.stat,
            0xFF42 => self.scy,
            0xFF43 => self.scx,
            0xFF44 => self.ly,
            0xFF45 => self.lyc,
            0xFF47 => self.bgp.raw(),
            0xFF48 => self.obp0.raw(),
            0xFF49 => self.obp1.raw(),
            0xFF4A => self.wy,
            0xFF4B => self.wx,
            _ => 0xFF,
        }
    }

    pub(crate) fn write_register(
        &mut self,
        addr: u16,
        value: u8,
        interrupts: &mut InterruptController,
    ) {
        match addr {
            0xFF40 => {
                let was_enabled = self.lcdc.display_enabled;
                self.lcdc = Lcdc::from(value);
                if was_enabled && !self.lcdc.display_enabled {
                    self.disable();
                }
            }
            0xFF41 => {
                self.stat = (value & 0x78) | (self.stat & 0x07);
                self.compare_ly(interrupts);
            }
            0xFF42 => self.scy = value,
            0xFF43 => self.scx = value,
            // LY is read-only.
            0xFF44 => {}
            0xFF45 => {
                self.lyc = value;
                self.compare_ly(interrupts);
            }
            0xFF47 => self.bgp.set(value, &self.shades),
            0xFF48 => self.obp0.set(value, &self.shades),
            0xFF49 => self.obp1.set(value, &self.shades),
            0xFF4A => self.wy = value,
            0xFF4B => self.wx = value,
            _ => {}
        }
    }

    /// Raw LCDC/STAT/scroll/palette values for debug snapshots.
    pub(crate) fn registers(&self) -> VideoRegisters {
        VideoRegisters {
            lcdc: u8::from(self.lcdc),
            stat: 0x80 | self.stat,
            scy: self.scy,
            scx: self.scx,
            ly: self.ly,
            lyc: self.lyc,
            wy: self.wy,
            wx: self.wx,
            bgp: self.bgp.raw(),
            obp0: self.obp0.raw(),
            obp1: self.obp1.raw(),
        }
    }
}

/// Plain copy of the video registers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VideoRegisters {
    pub lcdc: u8,
    pub stat: u8,
    pub scy: u8,
    pub scx: u8,
    pub ly: u8,
    pub lyc: u8,
    pub wy: u8,
    pub wx: u8,
    pub bgp: u8,
    pub obp0: u8,
    pub obp1: u8,
}
