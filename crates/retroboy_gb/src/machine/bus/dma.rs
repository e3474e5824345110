use super::MemoryBus;
use crate::machine::video::OAM_SIZE;

impl MemoryBus {
    /// OAM DMA: copy 160 bytes from `value << 8` into OAM at once.
    pub(super) fn oam_dma(&mut self, value: u8) {
        self.dma_source = value;
        let base = u16::from(value) << 8;
        for i in 0..OAM_SIZE {
            let byte = self.read(base.wrapping_add(i as u16));
            self.video.write_oam(i, byte);
        }
    }

    #[inline]
    pub(super) fn dma_source(&self) -> u8 {
        self.dma_source
    }
}
