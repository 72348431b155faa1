//! Board-agnostic core logic for the Phengos panel stack
//!
//! This crate contains everything that does not depend on a specific
//! panel controller or host platform:
//!
//! - Hardware abstraction traits (command link, power rail, reset line)
//! - The panel driver trait exposed to the graphics stack
//! - Power phase tracking for the bring-up state machine
//! - Display timing, orientation, and descriptor type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod descriptor;
pub mod phase;
pub mod traits;
