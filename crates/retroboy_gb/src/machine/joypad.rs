use super::interrupts::{InterruptController, InterruptFlags};

/// The eight DMG buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    Right,
    Left,
    Up,
    Down,
    A,
    B,
    Select,
    Start,
}

impl Button {
    pub const ALL: [Button; 8] = [
        Button::Right,
        Button::Left,
        Button::Up,
        Button::Down,
        Button::A,
        Button::B,
        Button::Select,
        Button::Start,
    ];

    /// Whether the key lives on the direction row, and its bit in that row.
    #[inline]
    fn position(self) -> (bool, u8) {
        match self {
            Button::Right => (true, 0),
            Button::Left => (true, 1),
            Button::Up => (true, 2),
            Button::Down => (true, 3),
            Button::A => (false, 0),
            Button::B => (false, 1),
            Button::Select => (false, 2),
            Button::Start => (false, 3),
        }
    }
}

/// P1/JOYP (0xFF00). Rows are active-low: a cleared bit is a held key.
#[derive(Clone, Debug)]
pub(crate) struct Joypad {
    select: u8,
    directions: u8,
    actions: u8,
}

impl Default for Joypad {
    fn default() -> Self {
        Self {
            select: 0x00,
            directions: 0x0F,
            actions: 0x0F,
        }
    }
}

impl Joypad {
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    /// Only the two column-select bits are writable.
    pub(crate) fn write(&mut self, value: u8) {
        self.select = value & 0x30;
    }

    pub(crate) fn read(&self) -> u8 {
        match self.select {
            0x10 => 0xC0 | self.select | self.actions,
            0x20 => 0xC0 | self.select | self.directions,
            0x30 => 0xFF,
            _ => 0xC0,
        }
    }

    /// Update one key. Only the released-to-pressed edge requests the
    /// joypad interrupt.
    pub(crate) fn set_button(
        &mut self,
        button: Button,
        pressed: bool,
        interrupts: &mut InterruptController,
    ) {
        let (direction, bit) = button.position();
        let row = if direction {
            &mut self.directions
        } else {
            &mut self.actions
        };
        let mask = 1u8 << bit;
        let was_pressed = *row & mask == 0;

        if pressed {
            *row &= !mask;
            if !was_pressed {
                interrupts.request(InterruptFlags::JOYPAD);
            }
        } else {
            *row |= mask;
        }
    }

    pub(crate) fn is_pressed(&self, button: Button) -> bool {
        let (direction, bit) = button.position();
        let row = if direction {
            self.directions
        } else {
            self.actions
        };
        row & (1 << bit) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_patterns() {
        let mut pad = Joypad::default();
        pad.write(0x30);
        assert_eq!(pad.read(), 0xFF);
        pad.write(0x00);
        assert_eq!(pad.read(), 0xC0);
        pad.write(0x10);
        assert_eq!(pad.read(), 0xDF);
        pad.write(0x20);
        assert_eq!(pad.read(), 0xEF);
    }

    #[test]
    fn press_clears_row_bit_and_requests_once() {
        let mut pad = Joypad::default();
        let mut ic = InterruptController::default();

        pad.set_button(Button::Start, true, &mut ic);
        assert_eq!(ic.requested(), InterruptFlags::JOYPAD);
        pad.write(0x10);
        assert_eq!(pad.read() & 0x0F, 0x07);
        pad.write(0x20);
        assert_eq!(pad.read() & 0x0F, 0x0F);

        ic.write_if(0);
        pad.set_button(Button::Start, true, &mut ic);
        assert!(ic.requested().is_empty());

        pad.set_button(Button::Start, false, &mut ic);
        assert!(!pad.is_pressed(Button::Start));
        assert!(ic.requested().is_empty());

        pad.set_button(Button::Down, true, &mut ic);
        assert_eq!(pad.read() & 0x0F, 0x07);
        assert!(pad.is_pressed(Button::Down));
    }
}
