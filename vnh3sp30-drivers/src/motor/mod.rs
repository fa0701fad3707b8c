//! Motor driver implementations
//!
//! - VNH3SP30: H-bridge with INA/INB direction select, PWM speed input,
//!   active-low DIAG fault line and analog current sense

pub mod vnh3sp30;

pub use vnh3sp30::Vnh3sp30;
