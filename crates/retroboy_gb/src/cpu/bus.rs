/// Abstraction over the Game Boy bus (memory and IO) as seen by the CPU.
///
/// The processor only ever touches the rest of the machine through these
/// entry points; interrupt request/enable state is reached through the
/// memory-mapped IF (0xFF0F) and IE (0xFFFF) registers.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Little-endian 16-bit read; the address wraps at 0xFFFF.
    fn read16(&mut self, addr: u16) -> u16 {
        let lo = self.read8(addr);
        let hi = self.read8(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    /// Little-endian 16-bit write; the low byte is stored first.
    fn write16(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write8(addr, lo);
        self.write8(addr.wrapping_add(1), hi);
    }
}
