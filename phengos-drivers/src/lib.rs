//! Panel driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in phengos-core:
//!
//! - The NT36860 DSI panel driver (power sequencing, init replay,
//!   output gating)
//! - The built-in descriptor registry
//! - The attach-time descriptor override loader

#![no_std]
#![deny(unsafe_code)]

pub mod panel;
