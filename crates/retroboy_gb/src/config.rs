use typed_builder::TypedBuilder;

use crate::machine::Color;
use crate::CYCLES_PER_FRAME;

/// The classic DMG green shades, lightest first.
pub const DMG_GREEN_PALETTE: [Color; 4] = [
    Color::new_rgb(0xE0, 0xF8, 0xD0),
    Color::new_rgb(0x88, 0xC0, 0x70),
    Color::new_rgb(0x34, 0x68, 0x56),
    Color::new_rgb(0x08, 0x18, 0x20),
];

/// Machine-level settings that are fixed for the lifetime of a `GameBoy`.
///
/// ```
/// use retroboy_gb::GameBoyConfig;
///
/// let config = GameBoyConfig::builder().cycles_per_frame(35_112).build();
/// assert_eq!(config.cycles_per_frame, 35_112);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct GameBoyConfig {
    /// T-cycle budget consumed by one call to `GameBoy::run_frame`.
    #[builder(default = CYCLES_PER_FRAME)]
    pub cycles_per_frame: u32,
    /// RGBA shades that the 2-bit palette entries resolve to.
    #[builder(default = DMG_GREEN_PALETTE)]
    pub palette: [Color; 4],
    /// Log every completed serial byte at `info` level.
    #[builder(default = false)]
    pub log_serial: bool,
}

impl Default for GameBoyConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
