//! GPIO line abstractions
//!
//! Lines are addressed by a small integer id, the way board pin tables
//! number them. A role that is not wired is represented as `None` at the
//! driver level, never as a magic id.

use embedded_hal::digital::PinState;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Physical line identifier (board pin number)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineId(pub u8);

impl LineId {
    /// Create a line id
    pub const fn new(pin: u8) -> Self {
        Self(pin)
    }

    /// Convert a raw signed pin number from a legacy pin table
    ///
    /// Any negative value means "not wired" and yields `None`. Values that
    /// do not fit a `u8` are also treated as not wired.
    pub const fn from_raw(raw: i16) -> Option<Self> {
        if raw < 0 || raw > u8::MAX as i16 {
            None
        } else {
            Some(Self(raw as u8))
        }
    }

    /// Raw pin number
    pub const fn pin(self) -> u8 {
        self.0
    }
}

impl From<u8> for LineId {
    fn from(pin: u8) -> Self {
        Self(pin)
    }
}

/// Digital logic level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic 0
    Low,
    /// Logic 1
    High,
}

impl Level {
    /// Check if the level is high
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }

    /// Check if the level is low
    pub const fn is_low(self) -> bool {
        !self.is_high()
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<PinState> for Level {
    fn from(state: PinState) -> Self {
        match state {
            PinState::Low => Level::Low,
            PinState::High => Level::High,
        }
    }
}

impl From<Level> for PinState {
    fn from(level: Level) -> Self {
        match level {
            Level::Low => PinState::Low,
            Level::High => PinState::High,
        }
    }
}

/// Line direction/pull configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineMode {
    /// Push-pull digital output
    Output,
    /// Floating input (also used for analog inputs)
    Input,
    /// Input with the internal pull-up enabled
    InputPullUp,
}

/// Digital line access
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip. Calls are infallible: a board layer that can fail
/// should decide locally how to surface it.
pub trait DigitalIo {
    /// Configure the direction and pull of a line
    fn configure_line_mode(&mut self, line: LineId, mode: LineMode);

    /// Drive an output line
    fn write_digital(&mut self, line: LineId, level: Level);

    /// Sample an input line
    fn read_digital(&mut self, line: LineId) -> Level;

    /// Drive an output line high
    fn set_high(&mut self, line: LineId) {
        self.write_digital(line, Level::High);
    }

    /// Drive an output line low
    fn set_low(&mut self, line: LineId) {
        self.write_digital(line, Level::Low);
    }
}
