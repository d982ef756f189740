//! Controller buttons and the 8-bit input mask.
//!
//! The console consumes controller state as a single byte with a fixed bit
//! layout that must be preserved bit-for-bit:
//!
//! `0:A  1:B  2:Select  3:Start  4:Up  5:Down  6:Left  7:Right`
//!
//! Every bit of the byte carries a button, so no encoding can set a bit
//! outside the defined positions.

use std::fmt;

/// One of the eight NES controller buttons.
///
/// The discriminant is the button's bit position in the input mask.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    /// Primary action button (bit 0).
    A = 0,
    /// Secondary action button (bit 1).
    B = 1,
    /// Select (bit 2).
    Select = 2,
    /// Start (bit 3).
    Start = 3,
    /// D-pad up (bit 4).
    Up = 4,
    /// D-pad down (bit 5).
    Down = 5,
    /// D-pad left (bit 6).
    Left = 6,
    /// D-pad right (bit 7).
    Right = 7,
}

impl Button {
    /// All buttons in bit order.
    pub const ALL: [Self; 8] = [
        Self::A,
        Self::B,
        Self::Select,
        Self::Start,
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
    ];

    /// The button's bit within the input mask.
    pub const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// Short name used in log output.
    const fn name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::Select => "Select",
            Self::Start => "Start",
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Simultaneous state of all eight buttons for one frame.
///
/// A plain value type: the scheduling policy produces one per frame and the
/// session forwards it to the console verbatim. Last write wins; nothing is
/// queued.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonMask(u8);

impl ButtonMask {
    /// No buttons pressed.
    pub const NONE: Self = Self(0);

    /// Builds a mask from a raw byte in the console's bit layout.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// The raw byte in the console's bit layout.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns the mask with `button` additionally pressed.
    pub const fn with(self, button: Button) -> Self {
        Self(self.0 | button.bit())
    }

    /// Presses `button`.
    pub fn press(&mut self, button: Button) {
        self.0 |= button.bit();
    }

    /// Releases `button`.
    pub fn release(&mut self, button: Button) {
        self.0 &= !button.bit();
    }

    /// Whether `button` is pressed in this mask.
    pub const fn is_pressed(self, button: Button) -> bool {
        self.0 & button.bit() != 0
    }

    /// The pressed buttons, in bit order.
    pub fn buttons(self) -> impl Iterator<Item = Button> {
        Button::ALL.into_iter().filter(move |b| self.is_pressed(*b))
    }
}

impl FromIterator<Button> for ButtonMask {
    fn from_iter<I: IntoIterator<Item = Button>>(iter: I) -> Self {
        let mut mask = Self::NONE;
        for button in iter {
            mask.press(button);
        }
        mask
    }
}

impl fmt::Display for ButtonMask {
    /// Renders the pressed buttons as `A+Start`, or `-` when empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("-");
        }
        let mut first = true;
        for button in self.buttons() {
            if !first {
                f.write_str("+")?;
            }
            write!(f, "{button}")?;
            first = false;
        }
        Ok(())
    }
}

impl fmt::Debug for ButtonMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ButtonMask({:#010b})", self.0)
    }
}
