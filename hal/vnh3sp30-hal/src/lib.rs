//! VNH3SP30 Hardware Abstraction Layer
//!
//! This crate defines the small capability set the motor driver consumes
//! from a platform I/O layer. Board support code implements these traits
//! (directly, or on top of `embedded-hal` pins) and the driver stays
//! board-agnostic.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (control loop, firmware)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  vnh3sp30-drivers (Vnh3sp30 driver)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  vnh3sp30-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  board A I/O  │       │  board B I/O  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::DigitalIo`] - Line mode configuration, digital read/write
//! - [`pwm::PwmOutput`] - PWM duty writes
//! - [`adc::AnalogInput`] - Raw ADC reads
//! - [`PlatformIo`] - Everything the driver needs, in one bound

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod pwm;

// Re-export key traits at crate root for convenience
pub use adc::AnalogInput;
pub use gpio::{DigitalIo, Level, LineId, LineMode};
pub use pwm::PwmOutput;

/// Full I/O capability set required by the motor driver
pub trait PlatformIo: DigitalIo + PwmOutput + AnalogInput {}

// Blanket implementation for types that implement all capabilities
impl<T: DigitalIo + PwmOutput + AnalogInput> PlatformIo for T {}
