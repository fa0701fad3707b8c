//! Hardware configuration types
//!
//! These types define how the driver's logical roles map onto board lines
//! and how logical speeds map onto the platform's PWM resolution.

use vnh3sp30_hal::LineId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::ConfigError;

/// Logical speed range of the driver (`-400..=400`)
pub const DEFAULT_SPEED_MAX: u16 = 400;

/// Full-scale duty of an 8-bit PWM output
pub const DEFAULT_DUTY_MAX: u16 = 255;

/// Widest PWM resolution representable in a `u16` duty
pub const MAX_RESOLUTION_BITS: u8 = 16;

/// Line assignment for the five driver roles
///
/// Every role is optional. Unwired outputs are simply never driven, an
/// unwired fault line reads as "ok" and an unwired current-sense line
/// reads as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinMap {
    /// PWM speed output
    pub pwm: Option<LineId>,
    /// INA direction select
    pub forward_select: Option<LineId>,
    /// INB direction select
    pub reverse_select: Option<LineId>,
    /// DIAG fault input (active-low, pulled up)
    pub fault: Option<LineId>,
    /// CS analog current-sense input
    pub current_sense: Option<LineId>,
}

impl PinMap {
    /// A map with no role wired
    pub const fn unwired() -> Self {
        Self {
            pwm: None,
            forward_select: None,
            reverse_select: None,
            fault: None,
            current_sense: None,
        }
    }

    /// Map the three output roles, leaving fault and current sense unwired
    pub const fn new(pwm: u8, forward_select: u8, reverse_select: u8) -> Self {
        Self {
            pwm: Some(LineId(pwm)),
            forward_select: Some(LineId(forward_select)),
            reverse_select: Some(LineId(reverse_select)),
            fault: None,
            current_sense: None,
        }
    }

    /// Wire the fault input
    pub const fn with_fault(self, line: u8) -> Self {
        Self {
            fault: Some(LineId(line)),
            ..self
        }
    }

    /// Wire the current-sense input
    pub const fn with_current_sense(self, line: u8) -> Self {
        Self {
            current_sense: Some(LineId(line)),
            ..self
        }
    }

    /// Build a map from signed pin numbers where a negative value means
    /// "not wired"
    pub const fn from_raw(pwm: i16, forward: i16, reverse: i16, fault: i16, sense: i16) -> Self {
        Self {
            pwm: LineId::from_raw(pwm),
            forward_select: LineId::from_raw(forward),
            reverse_select: LineId::from_raw(reverse),
            fault: LineId::from_raw(fault),
            current_sense: LineId::from_raw(sense),
        }
    }

    /// All roles in declaration order
    pub fn lines(&self) -> [Option<LineId>; 5] {
        [
            self.pwm,
            self.forward_select,
            self.reverse_select,
            self.fault,
            self.current_sense,
        ]
    }

    /// Check that no line is bound to more than one role
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lines = self.lines();
        for (i, line) in lines.iter().enumerate() {
            let Some(line) = line else { continue };
            if lines[i + 1..].contains(&Some(*line)) {
                return Err(ConfigError::LineConflict(*line));
            }
        }
        Ok(())
    }
}

/// Conversion from logical speed magnitude to PWM duty
///
/// `duty = magnitude * output_max / input_max`, truncating toward zero.
/// The default 400 → 255 pair reproduces the classic `speed * 51 / 80`
/// mapping bit for bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DutyScale {
    input_max: u16,
    output_max: u16,
}

impl Default for DutyScale {
    fn default() -> Self {
        Self {
            input_max: DEFAULT_SPEED_MAX,
            output_max: DEFAULT_DUTY_MAX,
        }
    }
}

impl DutyScale {
    /// Create a scale from an explicit range pair
    pub fn new(input_max: u16, output_max: u16) -> Result<Self, ConfigError> {
        let scale = Self {
            input_max,
            output_max,
        };
        scale.validate()?;
        Ok(scale)
    }

    /// Scale the default speed range onto a PWM timer of `bits` resolution
    ///
    /// 8 bits gives 255, 10 bits gives 1023.
    pub fn from_resolution_bits(bits: u8) -> Result<Self, ConfigError> {
        if bits == 0 || bits > MAX_RESOLUTION_BITS {
            return Err(ConfigError::UnsupportedResolution(bits));
        }
        let output_max = ((1u32 << bits) - 1) as u16;
        Self::new(DEFAULT_SPEED_MAX, output_max)
    }

    /// Largest accepted speed magnitude
    pub fn input_max(&self) -> u16 {
        self.input_max
    }

    /// Duty written at full speed
    pub fn output_max(&self) -> u16 {
        self.output_max
    }

    /// Check both ranges are non-empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input_max == 0 {
            return Err(ConfigError::ZeroInputRange);
        }
        if self.output_max == 0 {
            return Err(ConfigError::ZeroOutputRange);
        }
        Ok(())
    }

    /// Clamp a magnitude to the input range
    pub fn clamp(&self, magnitude: u32) -> u16 {
        magnitude.min(self.input_max as u32) as u16
    }

    /// Convert a speed magnitude to a duty value
    ///
    /// The magnitude is clamped first, so the result never exceeds
    /// `output_max`.
    pub fn duty(&self, magnitude: u16) -> u16 {
        let magnitude = self.clamp(magnitude as u32) as u32;
        (magnitude * self.output_max as u32)
            .checked_div(self.input_max as u32)
            .unwrap_or(0) as u16
    }
}
