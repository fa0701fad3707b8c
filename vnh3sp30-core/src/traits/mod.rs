//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and concrete motor driver implementations.

pub mod motor;

pub use motor::{Direction, DriverStatus, MotorDriver};
