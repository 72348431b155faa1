//! DCS instruction stream codec
//!
//! This crate defines the self-describing instruction stream format that
//! carries a panel's init sequence, and the decoder that turns an externally
//! supplied stream back into a validated list of DCS instructions.
//!
//! # Stream format
//!
//! A stream is a flat sequence of frames with no terminator:
//! ```text
//! ┌────────┬─────────────────────┐
//! │ LENGTH │ OPCODE + ARGUMENTS  │
//! │ 1B     │ 0–255B              │
//! └────────┴─────────────────────┘
//! ```
//!
//! Each frame's payload is one DCS instruction, copied intact — the codec
//! validates framing only and never interprets payload semantics.

#![no_std]
#![deny(unsafe_code)]

pub mod dcs;
pub mod stream;

pub use stream::{
    decode_stream, encode_stream, DecodeError, Instruction, MAX_INSTRUCTIONS, MAX_INSTR_LEN,
};
