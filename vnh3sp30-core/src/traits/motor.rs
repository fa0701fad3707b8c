//! Motor driver traits
//!
//! This module defines the command surface shared by brushed DC motor
//! drivers built on an H-bridge with two direction-select inputs and a
//! PWM speed input.

use vnh3sp30_hal::Level;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Motor rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// INA high, INB low
    #[default]
    Forward,
    /// INA low, INB high
    Reverse,
}

impl Direction {
    /// Get the opposite direction
    pub fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }

    /// Check if this is the forward direction
    pub fn is_forward(self) -> bool {
        self == Direction::Forward
    }
}

/// Fault status reported by the driver chip
///
/// The chip pulls its diagnostic line low on overcurrent, overtemperature
/// or undervoltage. This is a hardware condition, not a software error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverStatus {
    /// No fault reported (or no fault line wired)
    #[default]
    Ok,
    /// Chip is signalling a protection fault
    Fault,
}

impl DriverStatus {
    /// Decode the level of an active-low fault line
    pub fn from_fault_level(level: Level) -> Self {
        if level.is_high() {
            DriverStatus::Ok
        } else {
            DriverStatus::Fault
        }
    }

    /// Check if no fault is reported
    pub fn is_ok(self) -> bool {
        self == DriverStatus::Ok
    }

    /// Check if a fault is reported
    pub fn is_fault(self) -> bool {
        !self.is_ok()
    }
}

impl From<DriverStatus> for bool {
    /// `true` means ok
    fn from(status: DriverStatus) -> Self {
        status.is_ok()
    }
}

/// Trait for H-bridge DC motor drivers
///
/// Speeds are signed: the sign selects the direction and the magnitude the
/// duty cycle. Every command is applied immediately and returns the chip's
/// fault status so control loops can react without a separate poll.
pub trait MotorDriver {
    /// Command a signed speed
    ///
    /// Out-of-range values are clamped. A zero speed keeps the previous
    /// direction so the motor coasts instead of braking.
    fn set_speed(&mut self, speed: i32) -> DriverStatus;

    /// Brake with the given power (clamped to the speed range, negative = 0)
    ///
    /// Braking does not change the remembered direction.
    fn brake(&mut self, power: i32) -> DriverStatus;

    /// Read the fault status
    ///
    /// Takes `&mut self` because sampling an input may need mutable access.
    fn status(&mut self) -> DriverStatus;

    /// Raw current-sense reading, unscaled
    ///
    /// Converting to amps depends on the board's sense resistor and ADC
    /// reference and is left to the caller.
    fn motor_current(&mut self) -> u16;

    /// Last commanded signed speed (0 after braking)
    fn speed(&self) -> i32;

    /// Last commanded direction
    fn direction(&self) -> Direction;

    /// Check if the motor is commanded to stand still
    fn is_stopped(&self) -> bool {
        self.speed() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_default_is_forward() {
        assert_eq!(Direction::default(), Direction::Forward);
        assert!(Direction::Forward.is_forward());
        assert!(!Direction::Reverse.is_forward());
    }

    #[test]
    fn test_direction_opposite() {
        assert_eq!(Direction::Forward.opposite(), Direction::Reverse);
        assert_eq!(Direction::Reverse.opposite(), Direction::Forward);
    }

    #[test]
    fn test_fault_line_is_active_low() {
        assert_eq!(DriverStatus::from_fault_level(Level::High), DriverStatus::Ok);
        assert_eq!(DriverStatus::from_fault_level(Level::Low), DriverStatus::Fault);
    }

    #[test]
    fn test_status_to_bool() {
        assert!(bool::from(DriverStatus::Ok));
        assert!(!bool::from(DriverStatus::Fault));
        assert!(DriverStatus::Fault.is_fault());
    }
}
