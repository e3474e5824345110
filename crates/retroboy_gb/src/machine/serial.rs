/// Serial port sink (SB/SC at 0xFF01/0xFF02).
///
/// No transfer is clocked. Writing exactly 0x81 to SC captures the byte
/// currently in SB, which is how test ROMs print their results.
#[derive(Clone, Debug, Default)]
pub(crate) struct Serial {
    sb: u8,
    sc: u8,
    output: Vec<u8>,
    log_bytes: bool,
}

impl Serial {
    pub(crate) fn new(log_bytes: bool) -> Self {
        Self {
            log_bytes,
            ..Self::default()
        }
    }

    pub(crate) fn reset(&mut self) {
        self.sb = 0;
        self.sc = 0;
        self.output.clear();
    }

    pub(crate) fn read(&self, addr: u16) -> u8 {
        match addr {
            0xFF01 => self.sb,
            _ => 0x7E | self.sc,
        }
    }

    pub(crate) fn write(&mut self, addr: u16, value: u8) {
        match addr {
            0xFF01 => self.sb = value,
            _ => {
                self.sc = value & 0x81;
                if value == 0x81 {
                    self.output.push(self.sb);
                    if self.log_bytes {
                        log::info!("serial: {:02X} {:?}", self.sb, char::from(self.sb));
                    } else {
                        log::debug!("serial: {:02X}", self.sb);
                    }
                }
            }
        }
    }

    pub(crate) fn output(&self) -> &[u8] {
        &self.output
    }
}
