//! PWM output abstraction

use crate::gpio::LineId;

/// PWM-capable output lines
pub trait PwmOutput {
    /// Write a duty value in the platform's native PWM resolution
    ///
    /// For an 8-bit timer `0` is off and `255` is fully on.
    fn write_pwm(&mut self, line: LineId, duty: u16);
}
