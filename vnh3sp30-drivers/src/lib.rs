//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in vnh3sp30-core:
//!
//! - Motor drivers (VNH3SP30 H-bridge)

#![no_std]
#![deny(unsafe_code)]

pub mod motor;
