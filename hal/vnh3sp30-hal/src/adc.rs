//! Analog input abstraction

use crate::gpio::LineId;

/// ADC-capable input lines
pub trait AnalogInput {
    /// Read the raw ADC value in the platform's native resolution
    ///
    /// No scaling is applied (10-bit AVR ADCs return 0-1023, the RP2040
    /// returns 0-4095).
    fn read_analog(&mut self, line: LineId) -> u16;
}
