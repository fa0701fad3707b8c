//! Board-agnostic core logic for the VNH3SP30 motor driver
//!
//! This crate contains everything that does not depend on a concrete
//! driver implementation:
//!
//! - Motor driver trait, direction and fault status types
//! - Configuration type definitions (pin map, duty scaling)
//! - Configuration validation and flash persistence

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod traits;
